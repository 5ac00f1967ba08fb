//! Typed Rust client for the Twilio phone number REST API.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer for
//! wire-format details, and a small client layer issuing one request per call. It
//! covers searching numbers offered for purchase, buying one, and paging through the
//! numbers an account owns.
//!
//! ```rust,no_run
//! use twilio_numbers::{Auth, CountryCode, RequestOption, RequestOptions, TwilioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), twilio_numbers::TwilioError> {
//!     let client = TwilioClient::new(Auth::from_env()?);
//!     let us = CountryCode::new("US")?;
//!
//!     let found = client
//!         .available_phone_numbers()
//!         .local(&us, RequestOption::AreaCode(510))
//!         .await?;
//!     if let Some(number) = found.available_phone_numbers.first() {
//!         client
//!             .available_phone_numbers()
//!             .buy(number, RequestOptions::new())
//!             .await?;
//!     }
//!
//!     let mut page = client
//!         .incoming_phone_numbers()
//!         .list(RequestOptions::new())
//!         .await?;
//!     while page.has_next_page() {
//!         page = client
//!             .incoming_phone_numbers()
//!             .list_next_page(&page, RequestOptions::new())
//!             .await?;
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Auth, AvailablePhoneNumberService, IncomingPhoneNumberService, TwilioClient,
    TwilioClientBuilder, TwilioError,
};
pub use domain::{
    AccountSid, AddressRequirements, ApiKeySecret, ApiKeySid, AuthToken, AvailablePhoneNumber,
    AvailablePhoneNumberList, Capabilities, CountryCode, FriendlyName, HttpMethod,
    IncomingPhoneNumber, IncomingPhoneNumberList, IncomingPhoneNumberSid, PageSize, PhoneNumber,
    RawPhoneNumber, RequestOption, RequestOptionKind, RequestOptions, ValidationError,
};
