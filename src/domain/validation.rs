use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    InvalidSid {
        field: &'static str,
        input: String,
    },
    InvalidCountryCode {
        input: String,
    },
    InvalidPhoneNumber {
        input: String,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    PageSizeOutOfRange {
        min: u32,
        max: u32,
        actual: u32,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidSid { field, input } => write!(f, "invalid {field}: {input}"),
            Self::InvalidCountryCode { input } => {
                write!(f, "invalid ISO 3166-1 alpha-2 country code: {input}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::PageSizeOutOfRange { min, max, actual } => {
                write!(f, "page size out of range: {actual} (expected {min}..={max})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty {
            field: "AuthToken",
        };
        assert_eq!(err.to_string(), "AuthToken must not be empty");

        let err = ValidationError::InvalidSid {
            field: "AccountSid",
            input: "XX1".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid AccountSid: XX1");

        let err = ValidationError::InvalidCountryCode {
            input: "USA".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid ISO 3166-1 alpha-2 country code: USA"
        );

        let err = ValidationError::TooLong {
            field: "FriendlyName",
            max: 64,
            actual: 70,
        };
        assert_eq!(
            err.to_string(),
            "FriendlyName is too long: 70 characters (max 64)"
        );

        let err = ValidationError::PageSizeOutOfRange {
            min: 1,
            max: 1000,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "page size out of range: 0 (expected 1..=1000)"
        );
    }
}
