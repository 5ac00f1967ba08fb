//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod api_error;
mod available_phone_number;
mod capabilities;
mod decimal;
mod incoming_phone_number;
mod options;

pub use api_error::decode_api_error;
pub use available_phone_number::{decode_available_phone_number_list, encode_buy_form};
pub use incoming_phone_number::{
    decode_incoming_phone_number, decode_incoming_phone_number_list, next_page_options,
};
pub use options::encode_request_options;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|it| !it.trim().is_empty())
}
