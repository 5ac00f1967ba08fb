use std::fmt;

use phonenumber::country;

use crate::domain::validation::ValidationError;

const SID_LEN: usize = 34;

fn validate_sid(
    field: &'static str,
    prefix: &str,
    value: String,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    // prefix is ASCII, so byte 2 is always a char boundary once it matched
    let valid = trimmed.len() == SID_LEN
        && trimmed.starts_with(prefix)
        && trimmed[prefix.len()..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ValidationError::InvalidSid {
            field,
            input: trimmed.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Twilio account SID.
///
/// Invariant: `AC` followed by 32 hex digits, after trimming.
pub struct AccountSid(String);

impl AccountSid {
    /// Field name used by Twilio (`AccountSid`).
    pub const FIELD: &'static str = "AccountSid";
    const PREFIX: &'static str = "AC";

    /// Create a validated [`AccountSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_sid(Self::FIELD, Self::PREFIX, value.into()).map(Self)
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Twilio API key SID, used as the basic-auth user for API key credentials.
///
/// Invariant: `SK` followed by 32 hex digits, after trimming.
pub struct ApiKeySid(String);

impl ApiKeySid {
    /// Field name used by Twilio (`ApiKeySid`).
    pub const FIELD: &'static str = "ApiKeySid";
    const PREFIX: &'static str = "SK";

    /// Create a validated [`ApiKeySid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_sid(Self::FIELD, Self::PREFIX, value.into()).map(Self)
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SID of a purchased (incoming) phone number.
///
/// Invariant: `PN` followed by 32 hex digits, after trimming.
pub struct IncomingPhoneNumberSid(String);

impl IncomingPhoneNumberSid {
    /// Field name used by Twilio (`Sid`).
    pub const FIELD: &'static str = "Sid";
    const PREFIX: &'static str = "PN";

    /// Create a validated [`IncomingPhoneNumberSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        validate_sid(Self::FIELD, Self::PREFIX, value.into()).map(Self)
    }

    /// Borrow the validated SID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Twilio account auth token.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct AuthToken(String);

impl AuthToken {
    /// Field name used in configuration (`AuthToken`).
    pub const FIELD: &'static str = "AuthToken";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the token as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Secret paired with an [`ApiKeySid`].
///
/// Invariant: must not be empty.
pub struct ApiKeySecret(String);

impl ApiKeySecret {
    /// Field name used in configuration (`ApiKeySecret`).
    pub const FIELD: &'static str = "ApiKeySecret";

    /// Create a validated [`ApiKeySecret`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKeySecret(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// ISO 3166-1 alpha-2 country code used to scope number searches.
///
/// Invariant: exactly two ASCII letters, stored upper case.
pub struct CountryCode(String);

impl CountryCode {
    /// Path segment name used by Twilio (`CountryCode`).
    pub const FIELD: &'static str = "CountryCode";

    /// Create a validated [`CountryCode`]; `" us "` becomes `"US"`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCountryCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number sent to Twilio as typed (`PhoneNumber`, `NearNumber`).
///
/// Invariant: non-empty after trimming. No normalization happens here; convert from a
/// [`PhoneNumber`] to send the E.164 form.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Form field name used by Twilio (`PhoneNumber`).
    pub const FIELD: &'static str = "PhoneNumber";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Phone number normalized to E.164 (`+15105647903`).
///
/// Two numbers are equal when their E.164 forms are, whatever formatting they were parsed
/// from. Ordering and hashing follow the same rule.
pub struct PhoneNumber {
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse `input`, falling back to `default_region` when it has no `+` country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl AsRef<str>,
    ) -> Result<Self, ValidationError> {
        let input = input.as_ref().trim();
        if input.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, input).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: input.to_owned(),
            }
        })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self { e164, parsed })
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Country calling code, e.g. `1` for North American numbers.
    pub fn calling_code(&self) -> u16 {
        self.parsed.code().value()
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Human-readable label for a phone number (`FriendlyName`).
///
/// Invariant: non-empty after trimming and at most [`FriendlyName::MAX_CHARS`] characters.
pub struct FriendlyName(String);

impl FriendlyName {
    /// Form field name used by Twilio (`FriendlyName`).
    pub const FIELD: &'static str = "FriendlyName";

    /// Longest label Twilio accepts.
    pub const MAX_CHARS: usize = 64;

    /// Create a validated [`FriendlyName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let actual = trimmed.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max: Self::MAX_CHARS,
                actual,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Number of records per list page (`PageSize`).
///
/// Invariant: `1..=1000`.
pub struct PageSize(u32);

impl PageSize {
    /// Query parameter name used by Twilio (`PageSize`).
    pub const FIELD: &'static str = "PageSize";

    /// Minimum allowed page size.
    pub const MIN: u32 = 1;
    /// Maximum allowed page size.
    pub const MAX: u32 = 1000;

    /// Create a validated page size.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::PageSizeOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    /// Get the underlying page size.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP method Twilio uses when calling a configured webhook.
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Wire representation (`GET` / `POST`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}
