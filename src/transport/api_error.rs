use serde::Deserialize;

/// Twilio's error document, returned alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
    #[serde(default)]
    pub more_info: Option<String>,
}

/// Returns `None` when the body is not a Twilio error document.
pub fn decode_api_error(body: &str) -> Option<ApiErrorBody> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .filter(|it| !it.message.trim().is_empty())
}
