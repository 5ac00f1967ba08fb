use serde::Deserialize;

use super::capabilities::{CapabilitiesJson, address_requirements};
use super::options::decode_request_option;
use super::{TransportError, non_empty};
use crate::domain::{
    IncomingPhoneNumber, IncomingPhoneNumberList, PageSize, RequestOption, RequestOptions,
};

#[derive(Debug, Clone, Deserialize)]
struct IncomingPhoneNumberListJson {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    page_size: u32,
    #[serde(default)]
    start: Option<u32>,
    #[serde(default)]
    end: Option<u32>,
    #[serde(default)]
    uri: Option<String>,
    #[serde(default)]
    first_page_uri: Option<String>,
    #[serde(default)]
    next_page_uri: Option<String>,
    #[serde(default)]
    previous_page_uri: Option<String>,
    #[serde(default)]
    incoming_phone_numbers: Vec<IncomingPhoneNumberJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct IncomingPhoneNumberJson {
    sid: String,
    #[serde(default)]
    account_sid: Option<String>,
    #[serde(default)]
    friendly_name: Option<String>,
    phone_number: String,
    #[serde(default)]
    capabilities: Option<CapabilitiesJson>,
    #[serde(default)]
    address_requirements: Option<String>,
    #[serde(default)]
    beta: Option<bool>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    api_version: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    date_updated: Option<String>,
    #[serde(default)]
    voice_url: Option<String>,
    #[serde(default)]
    voice_method: Option<String>,
    #[serde(default)]
    voice_fallback_url: Option<String>,
    #[serde(default)]
    sms_url: Option<String>,
    #[serde(default)]
    sms_method: Option<String>,
    #[serde(default)]
    sms_fallback_url: Option<String>,
    #[serde(default)]
    status_callback: Option<String>,
    #[serde(default)]
    uri: Option<String>,
}

impl From<IncomingPhoneNumberJson> for IncomingPhoneNumber {
    fn from(value: IncomingPhoneNumberJson) -> Self {
        Self {
            sid: value.sid,
            account_sid: value.account_sid.unwrap_or_default(),
            friendly_name: value.friendly_name.unwrap_or_default(),
            phone_number: value.phone_number,
            capabilities: value.capabilities.unwrap_or_default().into(),
            address_requirements: address_requirements(value.address_requirements),
            beta: value.beta.unwrap_or(false),
            status: value.status,
            origin: value.origin,
            api_version: value.api_version,
            date_created: value.date_created,
            date_updated: value.date_updated,
            voice_url: non_empty(value.voice_url),
            voice_method: value.voice_method,
            voice_fallback_url: non_empty(value.voice_fallback_url),
            sms_url: non_empty(value.sms_url),
            sms_method: value.sms_method,
            sms_fallback_url: non_empty(value.sms_fallback_url),
            status_callback: non_empty(value.status_callback),
            uri: value.uri,
        }
    }
}

pub fn decode_incoming_phone_number(json: &str) -> Result<IncomingPhoneNumber, TransportError> {
    let parsed: IncomingPhoneNumberJson = serde_json::from_str(json)?;
    Ok(parsed.into())
}

pub fn decode_incoming_phone_number_list(
    json: &str,
) -> Result<IncomingPhoneNumberList, TransportError> {
    let parsed: IncomingPhoneNumberListJson = serde_json::from_str(json)?;
    Ok(IncomingPhoneNumberList {
        page: parsed.page,
        page_size: parsed.page_size,
        start: parsed.start,
        end: parsed.end,
        uri: parsed.uri.unwrap_or_default(),
        first_page_uri: parsed.first_page_uri,
        next_page_uri: parsed.next_page_uri,
        previous_page_uri: parsed.previous_page_uri,
        incoming_phone_numbers: parsed
            .incoming_phone_numbers
            .into_iter()
            .map(IncomingPhoneNumber::from)
            .collect(),
    })
}

/// Options addressing the page after `previous`, or `None` when it has no next cursor.
///
/// The page index is always `previous.page + 1`, and `PageSize` is the reported size when it
/// is valid. Every other known parameter of the cursor's query string is kept, so filters
/// stay paired with the `PageToken` Twilio issued for them.
pub fn next_page_options(previous: &IncomingPhoneNumberList) -> Option<RequestOptions> {
    let cursor = previous.next_page_cursor()?;

    let mut options = RequestOptions::from(RequestOption::Page(previous.page.saturating_add(1)));
    if let Ok(size) = PageSize::new(previous.page_size) {
        options.set(RequestOption::PageSize(size));
    }
    for option in cursor_options(cursor) {
        if !options.contains(option.kind()) {
            options.set(option);
        }
    }
    Some(options)
}

fn cursor_options(cursor: &str) -> Vec<RequestOption> {
    let Some((_, query)) = cursor.split_once('?') else {
        return Vec::new();
    };
    url::form_urlencoded::parse(query.as_bytes())
        .filter_map(|(name, value)| {
            let option = decode_request_option(&name, &value);
            if option.is_none() {
                log::debug!("dropping cursor parameter {name}");
            }
            option
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AddressRequirements, FriendlyName, RequestOptionKind};

    const NUMBER: &str = r#"
    {
      "account_sid": "AC0123456789abcdef0123456789abcdef",
      "address_requirements": "none",
      "api_version": "2010-04-01",
      "beta": false,
      "capabilities": {
        "voice": true,
        "sms": true,
        "mms": false,
        "fax": false
      },
      "date_created": "Thu, 30 Jul 2015 23:19:04 +0000",
      "date_updated": "Thu, 30 Jul 2015 23:19:04 +0000",
      "friendly_name": "(808) 925-5327",
      "origin": "twilio",
      "phone_number": "+18089255327",
      "sid": "PN0123456789abcdef0123456789abcdef",
      "sms_fallback_method": "POST",
      "sms_fallback_url": "",
      "sms_method": "POST",
      "sms_url": "https://demo.twilio.com/welcome/sms/reply",
      "status": "in-use",
      "status_callback": "",
      "uri": "/2010-04-01/Accounts/AC0123456789abcdef0123456789abcdef/IncomingPhoneNumbers/PN0123456789abcdef0123456789abcdef.json",
      "voice_method": "POST",
      "voice_url": null
    }
    "#;

    fn list_json(page: u32, next_page_uri: &str) -> String {
        format!(
            r#"{{
              "page": {page},
              "page_size": 1,
              "start": {page},
              "end": {page},
              "uri": "/2010-04-01/Accounts/AC/IncomingPhoneNumbers.json?PageSize=1&Page={page}",
              "first_page_uri": "/2010-04-01/Accounts/AC/IncomingPhoneNumbers.json?PageSize=1&Page=0",
              "next_page_uri": {next_page_uri},
              "previous_page_uri": null,
              "incoming_phone_numbers": [{NUMBER}]
            }}"#
        )
    }

    #[test]
    fn decode_incoming_phone_number_maps_payload() {
        let number = decode_incoming_phone_number(NUMBER).unwrap();
        assert_eq!(number.sid, "PN0123456789abcdef0123456789abcdef");
        assert_eq!(number.account_sid, "AC0123456789abcdef0123456789abcdef");
        assert_eq!(number.phone_number, "+18089255327");
        assert_eq!(number.friendly_name, "(808) 925-5327");
        assert!(number.capabilities.voice && number.capabilities.sms);
        assert_eq!(number.address_requirements, AddressRequirements::None);
        assert_eq!(number.status.as_deref(), Some("in-use"));
        assert_eq!(
            number.sms_url.as_deref(),
            Some("https://demo.twilio.com/welcome/sms/reply")
        );
        assert_eq!(number.sms_fallback_url, None);
        assert_eq!(number.voice_url, None);
        assert_eq!(number.status_callback, None);
    }

    #[test]
    fn decode_list_keeps_cursors_and_order() {
        let json = list_json(
            0,
            r#""/2010-04-01/Accounts/AC/IncomingPhoneNumbers.json?PageSize=1&Page=1&PageToken=PAPN0123""#,
        );
        let list = decode_incoming_phone_number_list(&json).unwrap();
        assert_eq!(list.page, 0);
        assert_eq!(list.page_size, 1);
        assert_eq!(list.start, Some(0));
        assert_eq!(list.incoming_phone_numbers.len(), 1);
        assert!(list.has_next_page());
        assert_eq!(list.previous_page_uri, None);
    }

    #[test]
    fn decode_list_treats_null_cursor_as_last_page() {
        let list = decode_incoming_phone_number_list(&list_json(4, "null")).unwrap();
        assert!(!list.has_next_page());
        assert_eq!(next_page_options(&list), None);
    }

    #[test]
    fn decode_list_rejects_malformed_json() {
        let err = decode_incoming_phone_number_list("[1, 2").unwrap_err();
        assert!(matches!(err, TransportError::Json(_)));
    }

    #[test]
    fn next_page_options_increment_page_and_forward_token() {
        let json = list_json(
            2,
            r#""/2010-04-01/Accounts/AC/IncomingPhoneNumbers.json?PageSize=1&Page=3&PageToken=PAPN%2B0123""#,
        );
        let list = decode_incoming_phone_number_list(&json).unwrap();
        let options = next_page_options(&list).unwrap();

        assert_eq!(
            options.get(RequestOptionKind::Page),
            Some(&RequestOption::Page(3))
        );
        assert_eq!(
            options.get(RequestOptionKind::PageSize),
            Some(&RequestOption::PageSize(PageSize::new(1).unwrap()))
        );
        assert_eq!(
            options.get(RequestOptionKind::PageToken),
            Some(&RequestOption::PageToken("PAPN+0123".to_owned()))
        );
    }

    #[test]
    fn next_page_options_keep_cursor_filters_with_token() {
        let json = list_json(
            0,
            r#""/2010-04-01/Accounts/AC/IncomingPhoneNumbers.json?PhoneNumber=%2B1510&FriendlyName=Front+desk&PageSize=1&Page=1&PageToken=PAPN111""#,
        );
        let list = decode_incoming_phone_number_list(&json).unwrap();
        let options = next_page_options(&list).unwrap();

        assert_eq!(
            options.get(RequestOptionKind::PhoneNumber),
            Some(&RequestOption::PhoneNumber("+1510".to_owned()))
        );
        assert_eq!(
            options.get(RequestOptionKind::FriendlyName),
            Some(&RequestOption::FriendlyName(
                FriendlyName::new("Front desk").unwrap()
            ))
        );
        assert_eq!(
            options.get(RequestOptionKind::PageToken),
            Some(&RequestOption::PageToken("PAPN111".to_owned()))
        );
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn next_page_options_prefer_list_page_over_cursor_page() {
        let json = list_json(
            6,
            r#""/2010-04-01/Accounts/AC/IncomingPhoneNumbers.json?PageSize=40&Page=2&Bogus=1""#,
        );
        let list = decode_incoming_phone_number_list(&json).unwrap();
        let options = next_page_options(&list).unwrap();

        assert_eq!(
            options.get(RequestOptionKind::Page),
            Some(&RequestOption::Page(7))
        );
        assert_eq!(
            options.get(RequestOptionKind::PageSize),
            Some(&RequestOption::PageSize(PageSize::new(1).unwrap()))
        );
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn next_page_options_skip_missing_token_and_invalid_page_size() {
        let mut list = decode_incoming_phone_number_list(&list_json(
            0,
            r#""/2010-04-01/Accounts/AC/IncomingPhoneNumbers.json?Page=1""#,
        ))
        .unwrap();
        list.page_size = 0;

        let options = next_page_options(&list).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(
            options.get(RequestOptionKind::Page),
            Some(&RequestOption::Page(1))
        );
    }
}
