use std::fmt::{self, Write};

use super::knowledge::Issue;

pub const CAUSES_HEADING: &str = "**Possible causes:**";
pub const SYMPTOMS_HEADING: &str = "**Typical symptoms:**";
pub const SOLUTIONS_HEADING: &str = "**Recommended solutions:**";
pub const MECHANIC_PROMPT: &str = "**Should you visit a mechanic?**";

/// Render the advisory text shown to the user for a matched issue.
pub fn render(issue: &Issue) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "Based on your description, you may be experiencing: **{}**",
        issue.problem
    )?;
    write_section(&mut out, CAUSES_HEADING, issue.causes)?;
    write_section(&mut out, SYMPTOMS_HEADING, issue.symptoms)?;
    write_section(&mut out, SOLUTIONS_HEADING, issue.solutions)?;
    write!(out, "\n{} {}", MECHANIC_PROMPT, issue.mechanic_visit)?;

    Ok(out)
}

fn write_section(out: &mut String, heading: &str, items: &[&str]) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::knowledge::Category;

    #[test]
    fn renders_sections_separated_by_blank_lines() {
        let issue = &Category::Exhaust.issues()[0];
        let text = render(issue).expect("render");
        let expected = "Based on your description, you may be experiencing: **Loud exhaust**\n\
\n\
**Possible causes:**\n\
- Hole in muffler\n\
- Broken exhaust pipe\n\
- Damaged catalytic converter\n\
- Exhaust leak at joint\n\
\n\
**Typical symptoms:**\n\
- Increased noise\n\
- Rumbling sound\n\
- Hissing near engine\n\
\n\
**Recommended solutions:**\n\
- Inspect entire exhaust system\n\
- Look for rust, holes or damaged parts\n\
\n\
**Should you visit a mechanic?** Yes - Exhaust repairs often require welding or special tools";
        assert_eq!(text, expected);
    }
}
