//! Validation rules for metadata fields
//!
//! Only presence and simple bounds are checked on the client. Everything else
//! (uniqueness, cross-field rules, business rules) belongs to the backend.

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn with_min(self, min: f64) -> Self {
        Self {
            min: Some(min),
            ..self
        }
    }

    pub const fn with_max(self, max: f64) -> Self {
        Self {
            max: Some(max),
            ..self
        }
    }

    pub const fn with_max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} не может быть пустым", field_label));
        }

        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!(
                    "{} не должен превышать {} символов",
                    field_label, max
                ));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} должен быть не менее {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} должен быть не более {}", field_label, max));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_string() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("  ", "Номер").is_err());
        assert!(rules.validate_string("PO-1", "Номер").is_ok());
        assert!(ValidationRules::none().validate_string("", "Номер").is_ok());
    }

    #[test]
    fn test_max_length_counts_chars() {
        let rules = ValidationRules::none().with_max_length(3);
        assert!(rules.validate_string("абв", "Код").is_ok());
        assert!(rules.validate_string("абвг", "Код").is_err());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::none().with_min(0.0).with_max(100.0);
        assert!(rules.validate_number(0.0, "Скидка").is_ok());
        assert!(rules.validate_number(100.0, "Скидка").is_ok());
        assert!(rules.validate_number(-0.5, "Скидка").is_err());
        assert!(rules.validate_number(100.5, "Скидка").is_err());
    }
}
