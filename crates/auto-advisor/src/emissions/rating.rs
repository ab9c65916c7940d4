use serde::{Deserialize, Serialize};

use super::factors::PollutantRates;

/// Letter grade for a vehicle's combined pollutant output, `A` cleanest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EmissionRating {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl EmissionRating {
    /// Weighted score: CO2 per hundred grams, NOx times ten, PM times a hundred.
    pub fn score(rates: &PollutantRates) -> f64 {
        rates.co2 / 100.0 + rates.nox * 10.0 + rates.pm * 100.0
    }

    /// Buckets are half-open, so a score sitting on a boundary takes the worse letter.
    pub fn from_score(score: f64) -> Self {
        if score < 1.0 {
            Self::A
        } else if score < 1.5 {
            Self::B
        } else if score < 2.5 {
            Self::C
        } else if score < 4.0 {
            Self::D
        } else if score < 6.0 {
            Self::E
        } else {
            Self::F
        }
    }

    pub fn for_rates(rates: &PollutantRates) -> Self {
        Self::from_score(Self::score(rates))
    }

    pub fn letter(&self) -> &'static str {
        match self {
            EmissionRating::A => "A",
            EmissionRating::B => "B",
            EmissionRating::C => "C",
            EmissionRating::D => "D",
            EmissionRating::E => "E",
            EmissionRating::F => "F",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_round_up_to_next_letter() {
        assert_eq!(EmissionRating::from_score(0.999), EmissionRating::A);
        assert_eq!(EmissionRating::from_score(1.0), EmissionRating::B);
        assert_eq!(EmissionRating::from_score(1.5), EmissionRating::C);
        assert_eq!(EmissionRating::from_score(2.5), EmissionRating::D);
        assert_eq!(EmissionRating::from_score(4.0), EmissionRating::E);
        assert_eq!(EmissionRating::from_score(6.0), EmissionRating::F);
    }

    #[test]
    fn rating_never_improves_as_score_grows() {
        let mut previous = EmissionRating::A;
        let mut score = 0.0;
        while score < 8.0 {
            let rating = EmissionRating::from_score(score);
            assert!(rating >= previous, "{score} rated {rating:?} after {previous:?}");
            previous = rating;
            score += 0.05;
        }
        assert_eq!(previous, EmissionRating::F);
    }

    #[test]
    fn electric_rates_score_zero() {
        let rates = PollutantRates {
            co2: 0.0,
            nox: 0.0,
            pm: 0.0,
        };
        assert_eq!(EmissionRating::for_rates(&rates), EmissionRating::A);
    }

    #[test]
    fn serializes_as_bare_letter() {
        let value = serde_json::to_value(EmissionRating::C).expect("serialize");
        assert_eq!(value, serde_json::json!("C"));
    }
}
