#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    pub voice: bool,
    pub sms: bool,
    pub mms: bool,
    pub fax: bool,
}

/// Whether Twilio requires an address on file before the number can be used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressRequirements {
    None,
    Any,
    Local,
    Foreign,
    /// A value this crate does not know, preserved as sent.
    Other(String),
}

impl AddressRequirements {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "none" => Self::None,
            "any" => Self::Any,
            "local" => Self::Local,
            "foreign" => Self::Foreign,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Any => "any",
            Self::Local => "local",
            Self::Foreign => "foreign",
            Self::Other(value) => value,
        }
    }
}

/// A number offered for purchase.
///
/// Region metadata (`lata` through `postal_code`) is only populated for US and CA numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailablePhoneNumber {
    pub friendly_name: String,
    /// E.164 formatted number.
    pub phone_number: String,
    pub iso_country: String,
    pub address_requirements: AddressRequirements,
    pub capabilities: Capabilities,
    pub beta: bool,
    pub lata: Option<String>,
    pub rate_center: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AvailablePhoneNumberList {
    pub available_phone_numbers: Vec<AvailablePhoneNumber>,
    pub uri: String,
}

/// A number owned by the account.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingPhoneNumber {
    pub sid: String,
    pub account_sid: String,
    pub friendly_name: String,
    pub phone_number: String,
    pub capabilities: Capabilities,
    pub address_requirements: AddressRequirements,
    pub beta: bool,
    pub status: Option<String>,
    pub origin: Option<String>,
    pub api_version: Option<String>,
    /// RFC 2822 timestamp as sent by Twilio.
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub voice_url: Option<String>,
    pub voice_method: Option<String>,
    pub voice_fallback_url: Option<String>,
    pub sms_url: Option<String>,
    pub sms_method: Option<String>,
    pub sms_fallback_url: Option<String>,
    pub status_callback: Option<String>,
    pub uri: Option<String>,
}

/// One page of owned numbers.
///
/// Fetching the next page yields a new value; a page is never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingPhoneNumberList {
    pub page: u32,
    pub page_size: u32,
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub uri: String,
    pub first_page_uri: Option<String>,
    pub next_page_uri: Option<String>,
    pub previous_page_uri: Option<String>,
    pub incoming_phone_numbers: Vec<IncomingPhoneNumber>,
}

impl IncomingPhoneNumberList {
    /// Cursor to the next page, if Twilio returned a non-empty one.
    pub fn next_page_cursor(&self) -> Option<&str> {
        self.next_page_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_cursor().is_some()
    }
}
