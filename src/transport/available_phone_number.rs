use serde::Deserialize;

use super::{TransportError, non_empty};
use super::capabilities::{CapabilitiesJson, address_requirements};
use super::decimal::TransportDecimal;
use super::options::encode_request_options;
use crate::domain::{
    AvailablePhoneNumber, AvailablePhoneNumberList, FriendlyName, RawPhoneNumber, RequestOption,
    RequestOptions,
};

#[derive(Debug, Clone, Deserialize)]
struct AvailablePhoneNumberListJson {
    #[serde(default)]
    available_phone_numbers: Vec<AvailablePhoneNumberJson>,
    #[serde(default)]
    uri: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct AvailablePhoneNumberJson {
    #[serde(default)]
    friendly_name: Option<String>,
    phone_number: String,
    #[serde(default)]
    iso_country: Option<String>,
    #[serde(default)]
    address_requirements: Option<String>,
    #[serde(default)]
    capabilities: Option<CapabilitiesJson>,
    #[serde(default)]
    beta: Option<bool>,
    #[serde(default)]
    lata: Option<String>,
    #[serde(default)]
    rate_center: Option<String>,
    #[serde(default)]
    latitude: Option<TransportDecimal>,
    #[serde(default)]
    longitude: Option<TransportDecimal>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    postal_code: Option<String>,
}

impl From<AvailablePhoneNumberJson> for AvailablePhoneNumber {
    fn from(value: AvailablePhoneNumberJson) -> Self {
        Self {
            friendly_name: value.friendly_name.unwrap_or_default(),
            phone_number: value.phone_number,
            iso_country: value.iso_country.unwrap_or_default(),
            address_requirements: address_requirements(value.address_requirements),
            capabilities: value.capabilities.unwrap_or_default().into(),
            beta: value.beta.unwrap_or(false),
            lata: non_empty(value.lata),
            rate_center: non_empty(value.rate_center),
            latitude: value.latitude.and_then(TransportDecimal::into_non_empty),
            longitude: value.longitude.and_then(TransportDecimal::into_non_empty),
            region: non_empty(value.region),
            postal_code: non_empty(value.postal_code),
        }
    }
}

pub fn decode_available_phone_number_list(
    json: &str,
) -> Result<AvailablePhoneNumberList, TransportError> {
    let parsed: AvailablePhoneNumberListJson = serde_json::from_str(json)?;
    Ok(AvailablePhoneNumberList {
        available_phone_numbers: parsed
            .available_phone_numbers
            .into_iter()
            .map(AvailablePhoneNumber::from)
            .collect(),
        uri: parsed.uri.unwrap_or_default(),
    })
}

/// Form body for purchasing `phone`.
///
/// `friendly_name` is a default the caller's options may override; the phone number
/// itself always comes from the selected number.
pub fn encode_buy_form(
    phone: &RawPhoneNumber,
    friendly_name: Option<&FriendlyName>,
    options: &RequestOptions,
) -> Vec<(String, String)> {
    let target = RequestOption::PhoneNumber(phone.raw().to_owned());
    let mut form = RequestOptions::from(target.clone());
    if let Some(name) = friendly_name {
        form.set(RequestOption::FriendlyName(name.clone()));
    }
    let mut form = form.merge(options.clone());
    form.set(target);
    encode_request_options(&form)
}
