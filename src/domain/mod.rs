//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{RequestOption, RequestOptionKind, RequestOptions};
pub use response::{
    AddressRequirements, AvailablePhoneNumber, AvailablePhoneNumberList, Capabilities,
    IncomingPhoneNumber, IncomingPhoneNumberList,
};
pub use validation::ValidationError;
pub use value::{
    AccountSid, ApiKeySecret, ApiKeySid, AuthToken, CountryCode, FriendlyName, HttpMethod,
    IncomingPhoneNumberSid, PageSize, PhoneNumber, RawPhoneNumber,
};
