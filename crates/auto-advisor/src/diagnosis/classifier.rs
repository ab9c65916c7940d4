use super::knowledge::{Category, Issue};

/// Lower-case the complaint and blank out anything that is not a letter, digit, or whitespace.
pub fn normalize_text(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || ch.is_whitespace() {
                ch
            } else {
                ' '
            }
        })
        .collect()
}

/// Number of distinct keywords of `category` found as substrings of `text`.
pub fn keyword_hits(category: Category, text: &str) -> usize {
    category
        .keywords()
        .iter()
        .filter(|keyword| text.contains(*keyword))
        .count()
}

/// Pick the category with the most keyword hits; earlier categories win ties.
pub fn classify(text: &str) -> Category {
    let mut best = Category::General;
    let mut best_hits = 0;

    for category in Category::ALL {
        let hits = keyword_hits(category, text);
        if hits > best_hits {
            best = category;
            best_hits = hits;
        }
    }

    best
}

fn mentions_any_token(phrase: &str, text: &str) -> bool {
    phrase
        .to_lowercase()
        .split_whitespace()
        .any(|token| text.contains(token))
}

/// Two points for a problem-name token in the text, one per symptom with a token in the text.
pub fn relevance(issue: &Issue, text: &str) -> u32 {
    let mut score = 0;
    if mentions_any_token(issue.problem, text) {
        score += 2;
    }
    score += issue
        .symptoms
        .iter()
        .filter(|symptom| mentions_any_token(symptom, text))
        .count() as u32;
    score
}

/// Highest scoring issue, or `None` when nothing scores above zero.
pub fn best_match<'a>(issues: &'a [Issue], text: &str) -> Option<&'a Issue> {
    let mut best = None;
    let mut best_score = 0;

    for issue in issues {
        let score = relevance(issue, text);
        if score > best_score {
            best = Some(issue);
            best_score = score;
        }
    }

    best
}
