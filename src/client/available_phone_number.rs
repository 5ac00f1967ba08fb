use super::{Method, TwilioClient, TwilioError};
use crate::domain::{
    AvailablePhoneNumber, AvailablePhoneNumberList, CountryCode, FriendlyName,
    IncomingPhoneNumber, PhoneNumber, RawPhoneNumber, RequestOptions,
};
use crate::transport;

const INCOMING_PHONE_NUMBERS_PATH: &str = "/IncomingPhoneNumbers.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberType {
    Local,
    TollFree,
    Mobile,
}

impl NumberType {
    fn resource(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::TollFree => "TollFree",
            Self::Mobile => "Mobile",
        }
    }
}

#[derive(Clone, Copy)]
/// Numbers offered for purchase, scoped by country.
///
/// Obtained from [`TwilioClient::available_phone_numbers`].
pub struct AvailablePhoneNumberService<'a> {
    client: &'a TwilioClient,
}

impl<'a> AvailablePhoneNumberService<'a> {
    pub(super) fn new(client: &'a TwilioClient) -> Self {
        Self { client }
    }

    /// Search local (geographic) numbers in `country_code`.
    ///
    /// Options become query parameters, e.g. [`RequestOption::AreaCode`] or
    /// [`RequestOption::Contains`].
    ///
    /// Errors:
    /// - [`TwilioError::Transport`] when the request cannot be sent,
    /// - [`TwilioError::Api`] / [`TwilioError::HttpStatus`] for non-2xx responses,
    /// - [`TwilioError::Parse`] when the body is not a search result.
    ///
    /// [`RequestOption::AreaCode`]: crate::domain::RequestOption::AreaCode
    /// [`RequestOption::Contains`]: crate::domain::RequestOption::Contains
    pub async fn local(
        &self,
        country_code: &CountryCode,
        options: impl Into<RequestOptions>,
    ) -> Result<AvailablePhoneNumberList, TwilioError> {
        self.search(country_code, NumberType::Local, options.into())
            .await
    }

    /// Search toll-free numbers in `country_code`. Errors as for [`Self::local`].
    pub async fn toll_free(
        &self,
        country_code: &CountryCode,
        options: impl Into<RequestOptions>,
    ) -> Result<AvailablePhoneNumberList, TwilioError> {
        self.search(country_code, NumberType::TollFree, options.into())
            .await
    }

    /// Search mobile numbers in `country_code`. Errors as for [`Self::local`].
    pub async fn mobile(
        &self,
        country_code: &CountryCode,
        options: impl Into<RequestOptions>,
    ) -> Result<AvailablePhoneNumberList, TwilioError> {
        self.search(country_code, NumberType::Mobile, options.into())
            .await
    }

    async fn search(
        &self,
        country_code: &CountryCode,
        number_type: NumberType,
        options: RequestOptions,
    ) -> Result<AvailablePhoneNumberList, TwilioError> {
        let path = format!(
            "/AvailablePhoneNumbers/{}/{}.json",
            country_code.as_str(),
            number_type.resource()
        );
        let query = transport::encode_request_options(&options);

        let body = self
            .client
            .send(Method::Get, &path, query, Vec::new())
            .await?;

        transport::decode_available_phone_number_list(&body).map_err(TwilioError::parse)
    }

    /// Purchase `number` for the account.
    ///
    /// The form carries the number and its friendly name; `options` are merged on top, so a
    /// [`RequestOption::FriendlyName`] replaces the copied name. The purchased number is
    /// always `number.phone_number`, normalized to E.164; a number that does not parse
    /// fails with [`TwilioError::Validation`] before anything is sent.
    ///
    /// There is no idempotency key: if Twilio accepted the purchase but the response
    /// cannot be decoded, this returns [`TwilioError::Parse`] even though the number is
    /// now owned.
    ///
    /// [`RequestOption::FriendlyName`]: crate::domain::RequestOption::FriendlyName
    pub async fn buy(
        &self,
        number: &AvailablePhoneNumber,
        options: impl Into<RequestOptions>,
    ) -> Result<IncomingPhoneNumber, TwilioError> {
        let phone = RawPhoneNumber::from(PhoneNumber::parse(None, &number.phone_number)?);
        // Labels Twilio would reject are left out and the default label applies.
        let friendly_name = FriendlyName::new(number.friendly_name.as_str()).ok();
        let form = transport::encode_buy_form(&phone, friendly_name.as_ref(), &options.into());

        log::info!("purchasing phone number {}", phone.raw());
        let body = self
            .client
            .send(Method::Post, INCOMING_PHONE_NUMBERS_PATH, Vec::new(), form)
            .await?;

        transport::decode_incoming_phone_number(&body).map_err(TwilioError::parse)
    }
}
