use crate::domain::{
    FriendlyName, HttpMethod, PageSize, RawPhoneNumber, RequestOption, RequestOptions,
};

fn encode_bool(value: bool) -> String {
    if value { "true" } else { "false" }.to_owned()
}

fn encode_value(option: &RequestOption) -> String {
    match option {
        RequestOption::Page(page) => page.to_string(),
        RequestOption::PageSize(size) => size.value().to_string(),
        RequestOption::AreaCode(code) => code.to_string(),
        RequestOption::Distance(miles) => miles.to_string(),
        RequestOption::SmsEnabled(flag)
        | RequestOption::MmsEnabled(flag)
        | RequestOption::VoiceEnabled(flag)
        | RequestOption::FaxEnabled(flag)
        | RequestOption::ExcludeAllAddressRequired(flag)
        | RequestOption::ExcludeLocalAddressRequired(flag)
        | RequestOption::ExcludeForeignAddressRequired(flag)
        | RequestOption::Beta(flag) => encode_bool(*flag),
        RequestOption::PageToken(value)
        | RequestOption::Contains(value)
        | RequestOption::InRegion(value)
        | RequestOption::InPostalCode(value)
        | RequestOption::InLata(value)
        | RequestOption::InRateCenter(value)
        | RequestOption::PhoneNumber(value)
        | RequestOption::Origin(value)
        | RequestOption::VoiceUrl(value)
        | RequestOption::SmsUrl(value)
        | RequestOption::StatusCallback(value) => value.clone(),
        RequestOption::NearNumber(phone) => phone.raw().to_owned(),
        RequestOption::FriendlyName(name) => name.as_str().to_owned(),
        RequestOption::VoiceMethod(method) | RequestOption::SmsMethod(method) => {
            method.as_str().to_owned()
        }
    }
}

/// Encode options as `(name, value)` pairs, usable as query string or form body.
pub fn encode_request_options(options: &RequestOptions) -> Vec<(String, String)> {
    options
        .iter()
        .map(|option| (option.field().to_owned(), encode_value(option)))
        .collect()
}

fn decode_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn decode_method(value: &str) -> Option<HttpMethod> {
    match value.to_ascii_uppercase().as_str() {
        "GET" => Some(HttpMethod::Get),
        "POST" => Some(HttpMethod::Post),
        _ => None,
    }
}

fn decode_text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

/// Decode a `(name, value)` pair back into an option.
///
/// Returns `None` for parameters that are unknown or whose value does not validate.
pub fn decode_request_option(name: &str, value: &str) -> Option<RequestOption> {
    let option = match name {
        "Page" => RequestOption::Page(value.parse().ok()?),
        "PageSize" => RequestOption::PageSize(PageSize::new(value.parse().ok()?).ok()?),
        "PageToken" => RequestOption::PageToken(decode_text(value)?),
        "AreaCode" => RequestOption::AreaCode(value.parse().ok()?),
        "Contains" => RequestOption::Contains(decode_text(value)?),
        "SmsEnabled" => RequestOption::SmsEnabled(decode_bool(value)?),
        "MmsEnabled" => RequestOption::MmsEnabled(decode_bool(value)?),
        "VoiceEnabled" => RequestOption::VoiceEnabled(decode_bool(value)?),
        "FaxEnabled" => RequestOption::FaxEnabled(decode_bool(value)?),
        "ExcludeAllAddressRequired" => {
            RequestOption::ExcludeAllAddressRequired(decode_bool(value)?)
        }
        "ExcludeLocalAddressRequired" => {
            RequestOption::ExcludeLocalAddressRequired(decode_bool(value)?)
        }
        "ExcludeForeignAddressRequired" => {
            RequestOption::ExcludeForeignAddressRequired(decode_bool(value)?)
        }
        "Beta" => RequestOption::Beta(decode_bool(value)?),
        "InRegion" => RequestOption::InRegion(decode_text(value)?),
        "InPostalCode" => RequestOption::InPostalCode(decode_text(value)?),
        "InLata" => RequestOption::InLata(decode_text(value)?),
        "InRateCenter" => RequestOption::InRateCenter(decode_text(value)?),
        "NearNumber" => RequestOption::NearNumber(RawPhoneNumber::new(value).ok()?),
        "Distance" => RequestOption::Distance(value.parse().ok()?),
        "PhoneNumber" => RequestOption::PhoneNumber(decode_text(value)?),
        "FriendlyName" => RequestOption::FriendlyName(FriendlyName::new(value).ok()?),
        "Origin" => RequestOption::Origin(decode_text(value)?),
        "VoiceUrl" => RequestOption::VoiceUrl(decode_text(value)?),
        "VoiceMethod" => RequestOption::VoiceMethod(decode_method(value)?),
        "SmsUrl" => RequestOption::SmsUrl(decode_text(value)?),
        "SmsMethod" => RequestOption::SmsMethod(decode_method(value)?),
        "StatusCallback" => RequestOption::StatusCallback(decode_text(value)?),
        _ => return None,
    };
    Some(option)
}
