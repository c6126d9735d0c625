//! Validation rules for form fields
//!
//! Pure functions, safe to call on every keystroke.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::money;

/// Сообщение для незаполненного обязательного поля
pub const REQUIRED_MESSAGE: &str = "This field is required";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+63|0)[0-9]{10}$").expect("Invalid mobile regex"));
static SSS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{7}-\d$").expect("Invalid SSS regex"));
static PHILHEALTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{9}-\d$").expect("Invalid PhilHealth regex"));
static PAGIBIG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{4}-\d{4}$").expect("Invalid Pag-IBIG regex"));
static TIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-\d{3}-\d{3}-\d{3}$").expect("Invalid TIN regex"));

/// Формат значения поля
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldFormat {
    Email,
    MobileNumber,
    SssNumber,
    PhilHealthNumber,
    PagIbigNumber,
    TinNumber,
    Money,
    Hours,
    Date,
}

impl FieldFormat {
    pub const ALL: [FieldFormat; 9] = [
        Self::Email,
        Self::MobileNumber,
        Self::SssNumber,
        Self::PhilHealthNumber,
        Self::PagIbigNumber,
        Self::TinNumber,
        Self::Money,
        Self::Hours,
        Self::Date,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::MobileNumber => "mobile_number",
            Self::SssNumber => "sss_number",
            Self::PhilHealthNumber => "philhealth_number",
            Self::PagIbigNumber => "pagibig_number",
            Self::TinNumber => "tin_number",
            Self::Money => "money",
            Self::Hours => "hours",
            Self::Date => "date",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Сообщение об ошибке формата
    pub fn message(&self) -> &'static str {
        match self {
            Self::Email => "Please enter a valid email address",
            Self::MobileNumber => {
                "Please enter a valid mobile number (+63 or 0 followed by 10 digits)"
            }
            Self::SssNumber => "Please enter a valid SSS number (XX-XXXXXXX-X)",
            Self::PhilHealthNumber => "Please enter a valid PhilHealth number (XX-XXXXXXXXX-X)",
            Self::PagIbigNumber => "Please enter a valid Pag-IBIG number (XXXX-XXXX-XXXX)",
            Self::TinNumber => "Please enter a valid TIN number (XXX-XXX-XXX-XXX)",
            Self::Money => "Please enter a valid amount",
            Self::Hours => "Please enter a valid number of hours",
            Self::Date => "Please enter a valid date (YYYY-MM-DD)",
        }
    }

    /// Проверить непустое значение на соответствие формату
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL_RE.is_match(value),
            Self::MobileNumber => MOBILE_RE.is_match(value),
            Self::SssNumber => SSS_RE.is_match(value),
            Self::PhilHealthNumber => PHILHEALTH_RE.is_match(value),
            Self::PagIbigNumber => PAGIBIG_RE.is_match(value),
            Self::TinNumber => TIN_RE.is_match(value),
            Self::Money => money::parse_amount(value).is_some_and(|v| v >= 0.0),
            Self::Hours => value
                .trim()
                .parse::<f64>()
                .is_ok_and(|v| v.is_finite() && v >= 0.0),
            Self::Date => chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").is_ok(),
        }
    }
}

/// Результат проверки одного поля
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCheck {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl FieldCheck {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub format: Option<FieldFormat>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            format: None,
        }
    }

    /// Create validation rules for required text field
    pub const fn required() -> Self {
        Self {
            required: true,
            format: None,
        }
    }

    /// Optional field, checked against `format` when a value is present
    pub const fn format(format: FieldFormat) -> Self {
        Self {
            required: false,
            format: Some(format),
        }
    }

    pub const fn required_format(format: FieldFormat) -> Self {
        Self {
            required: true,
            format: Some(format),
        }
    }

    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Поле участвует в валидации и в расчёте прогресса формы
    pub const fn is_validated(&self) -> bool {
        self.required || self.format.is_some()
    }

    /// Validate a raw value against the rules
    pub fn check(&self, value: &str) -> FieldCheck {
        if value.trim().is_empty() {
            return if self.required {
                FieldCheck::fail(REQUIRED_MESSAGE)
            } else {
                FieldCheck::ok()
            };
        }

        match self.format {
            Some(format) => validate_format(format, value),
            None => FieldCheck::ok(),
        }
    }
}

/// Проверка значения по правилам поля
pub fn validate(rules: &ValidationRules, raw: &str) -> FieldCheck {
    rules.check(raw)
}

/// Проверка формата; пустое значение всегда допустимо
pub fn validate_format(format: FieldFormat, raw: &str) -> FieldCheck {
    if raw.trim().is_empty() || format.accepts(raw) {
        FieldCheck::ok()
    } else {
        FieldCheck::fail(format.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(key: &str, value: &str) -> FieldCheck {
        validate_format(FieldFormat::from_key(key).unwrap(), value)
    }

    #[test]
    fn test_sss_number() {
        assert!(check("sss_number", "34-1234567-8").valid);

        let bad = check("sss_number", "341234567-8");
        assert!(!bad.valid);
        assert_eq!(bad.message, "Please enter a valid SSS number (XX-XXXXXXX-X)");
    }

    #[test]
    fn test_government_ids() {
        assert!(check("philhealth_number", "12-345678901-2").valid);
        assert!(!check("philhealth_number", "12-34567890-2").valid);
        assert!(check("pagibig_number", "1234-5678-9012").valid);
        assert!(!check("pagibig_number", "1234-5678-901").valid);
        assert!(check("tin_number", "123-456-789-000").valid);
        assert!(!check("tin_number", "123-456-789").valid);
    }

    #[test]
    fn test_email() {
        assert!(check("email", "juan.delacruz@example.ph").valid);
        assert!(!check("email", "juan@example").valid);
        assert!(!check("email", "juan dela@example.ph").valid);
        assert!(!check("email", "@example.ph").valid);
    }

    #[test]
    fn test_mobile_number() {
        assert!(check("mobile_number", "+639171234567").valid);
        assert!(check("mobile_number", "09171234567").valid);
        assert!(!check("mobile_number", "9171234567").valid);
        assert!(!check("mobile_number", "+63917123456").valid);
        assert!(!check("mobile_number", "0917-123-4567").valid);
    }

    #[test]
    fn test_money_hours_date() {
        assert!(check("money", "₱45,000.00").valid);
        assert!(check("money", "1200").valid);
        assert!(!check("money", "abc").valid);
        assert!(!check("money", "-5").valid);
        assert!(check("hours", "160").valid);
        assert!(check("hours", "37.5").valid);
        assert!(!check("hours", "-1").valid);
        assert!(check("date", "1990-02-28").valid);
        assert!(!check("date", "1990-02-30").valid);
        assert!(!check("date", "28/02/1990").valid);
    }

    #[test]
    fn test_empty_optional_is_valid() {
        for format in FieldFormat::ALL {
            assert!(validate_format(format, "").valid, "{}", format.key());
            assert!(validate(&ValidationRules::format(format), "   ").valid);
        }
    }

    #[test]
    fn test_required() {
        let rules = ValidationRules::required();
        let empty = validate(&rules, "  ");
        assert!(!empty.valid);
        assert_eq!(empty.message, REQUIRED_MESSAGE);
        assert!(validate(&rules, "Juan").valid);

        let rules = ValidationRules::required_format(FieldFormat::Money);
        assert_eq!(validate(&rules, "").message, REQUIRED_MESSAGE);
        assert_eq!(validate(&rules, "x").message, "Please enter a valid amount");
    }

    #[test]
    fn test_from_key_round_trip() {
        for format in FieldFormat::ALL {
            assert_eq!(FieldFormat::from_key(format.key()), Some(format));
        }
        assert_eq!(FieldFormat::from_key("passport"), None);
    }
}
