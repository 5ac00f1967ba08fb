use serde::Deserialize;
use serde::de::Error as DeError;

/// Coordinate-like value returned by Twilio as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`37.80` remains `"37.80"` instead of becoming `"37.8"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportDecimal(String);

impl TransportDecimal {
    /// Blank strings carry no value and map to `None`.
    pub fn into_non_empty(self) -> Option<String> {
        let trimmed = self.0.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == self.0.len() {
            Some(self.0)
        } else {
            Some(trimmed.to_owned())
        }
    }
}

impl<'de> Deserialize<'de> for TransportDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected decimal field to be JSON string or number",
            )),
        }
    }
}
