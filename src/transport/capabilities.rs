use serde::Deserialize;

use crate::domain::{AddressRequirements, Capabilities};

/// Twilio spells SMS/MMS in upper case on available numbers and lower case on owned ones.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CapabilitiesJson {
    #[serde(default, alias = "Voice")]
    voice: Option<bool>,
    #[serde(default, alias = "SMS")]
    sms: Option<bool>,
    #[serde(default, alias = "MMS")]
    mms: Option<bool>,
    #[serde(default, alias = "Fax")]
    fax: Option<bool>,
}

impl From<CapabilitiesJson> for Capabilities {
    fn from(value: CapabilitiesJson) -> Self {
        Self {
            voice: value.voice.unwrap_or(false),
            sms: value.sms.unwrap_or(false),
            mms: value.mms.unwrap_or(false),
            fax: value.fax.unwrap_or(false),
        }
    }
}

pub fn address_requirements(value: Option<String>) -> AddressRequirements {
    value
        .as_deref()
        .map(AddressRequirements::from_wire)
        .unwrap_or(AddressRequirements::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> Capabilities {
        serde_json::from_str::<CapabilitiesJson>(json)
            .unwrap()
            .into()
    }

    #[test]
    fn accepts_both_spellings() {
        let upper = decode(r#"{"voice": true, "SMS": true, "MMS": false}"#);
        assert_eq!(
            upper,
            Capabilities {
                voice: true,
                sms: true,
                mms: false,
                fax: false,
            }
        );

        let lower = decode(r#"{"voice": false, "sms": true, "mms": true, "fax": true}"#);
        assert!(lower.sms && lower.mms && lower.fax && !lower.voice);
    }

    #[test]
    fn missing_or_null_flags_are_false() {
        assert_eq!(decode(r#"{"voice": null}"#), Capabilities::default());
        assert_eq!(decode("{}"), Capabilities::default());
    }

    #[test]
    fn address_requirements_default_to_none() {
        assert_eq!(address_requirements(None), AddressRequirements::None);
        assert_eq!(
            address_requirements(Some("local".to_owned())),
            AddressRequirements::Local
        );
    }
}
