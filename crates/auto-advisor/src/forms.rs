//! Form payloads posted by the web front end, and their validation.

use serde::Deserialize;

use crate::emissions::VehicleProfile;

/// Raw prediction form. Numeric fields arrive as strings and default to zero when absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimateForm {
    #[serde(default)]
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub engine_size: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

impl EstimateForm {
    pub fn into_profile(self) -> Result<VehicleProfile, RequestError> {
        // "inf" and "NaN" parse as f64 but are not engine sizes
        let engine_size = match self.engine_size.as_deref() {
            None => 0.0,
            Some(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|size| size.is_finite())
                .ok_or_else(|| RequestError::InvalidNumber {
                    field: "engine_size",
                    value: raw.to_string(),
                })?,
        };

        let year = match self.year.as_deref() {
            None => 0,
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| RequestError::InvalidNumber {
                    field: "year",
                    value: raw.to_string(),
                })?,
        };

        Ok(VehicleProfile {
            vehicle_type: self.vehicle_type.unwrap_or_default(),
            fuel_type: self.fuel_type.unwrap_or_default(),
            engine_size,
            year,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: Option<String>,
}

impl ChatForm {
    pub fn into_message(self) -> Result<String, RequestError> {
        match self.message {
            Some(message) if !message.is_empty() => Ok(message),
            _ => Err(RequestError::MissingMessage),
        }
    }
}

/// Caller mistakes rejected before any computation runs.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("{field} must be numeric, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("No message provided")]
    MissingMessage,
    #[error("invalid form submission: {0}")]
    MalformedForm(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(engine_size: Option<&str>, year: Option<&str>) -> EstimateForm {
        EstimateForm {
            vehicle_type: Some("suv".to_string()),
            fuel_type: Some("hybrid".to_string()),
            engine_size: engine_size.map(str::to_string),
            year: year.map(str::to_string),
        }
    }

    #[test]
    fn missing_numbers_default_to_zero() {
        let profile = form(None, None).into_profile().expect("valid form");
        assert_eq!(profile.engine_size, 0.0);
        assert_eq!(profile.year, 0);
    }

    #[test]
    fn numbers_tolerate_surrounding_whitespace() {
        let profile = form(Some(" 2.4 "), Some("2019\n"))
            .into_profile()
            .expect("valid form");
        assert_eq!(profile.engine_size, 2.4);
        assert_eq!(profile.year, 2019);
    }

    #[test]
    fn garbage_numbers_are_rejected() {
        let err = form(Some("big"), Some("2019"))
            .into_profile()
            .expect_err("engine size must parse");
        assert_eq!(err.to_string(), "engine_size must be numeric, got 'big'");

        let err = form(Some("1.6"), Some("2019.5"))
            .into_profile()
            .expect_err("year must be an integer");
        assert!(matches!(err, RequestError::InvalidNumber { field: "year", .. }));
    }

    #[test]
    fn non_finite_engine_sizes_are_rejected() {
        for raw in ["inf", "-inf", "NaN", "infinity"] {
            let err = form(Some(raw), Some("2019"))
                .into_profile()
                .expect_err("non-finite engine size");
            assert_eq!(
                err.to_string(),
                format!("engine_size must be numeric, got '{raw}'")
            );
        }
    }

    #[test]
    fn absent_categories_become_empty_strings() {
        let profile = EstimateForm::default().into_profile().expect("valid form");
        assert_eq!(profile.vehicle_type, "");
        assert_eq!(profile.fuel_type, "");
    }

    #[test]
    fn chat_requires_a_message() {
        assert!(matches!(
            ChatForm::default().into_message(),
            Err(RequestError::MissingMessage)
        ));
        assert!(ChatForm {
            message: Some(String::new())
        }
        .into_message()
        .is_err());
        assert_eq!(
            ChatForm {
                message: Some("engine knocking".to_string())
            }
            .into_message()
            .expect("message present"),
            "engine knocking"
        );
    }
}
