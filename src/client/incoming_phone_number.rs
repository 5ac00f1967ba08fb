use super::{Method, TwilioClient, TwilioError};
use crate::domain::{
    IncomingPhoneNumber, IncomingPhoneNumberList, IncomingPhoneNumberSid, RequestOptions,
};
use crate::transport;

const LIST_PATH: &str = "/IncomingPhoneNumbers.json";

fn instance_path(sid: &IncomingPhoneNumberSid) -> String {
    format!("/IncomingPhoneNumbers/{}.json", sid.as_str())
}

#[derive(Clone, Copy)]
/// Numbers owned by the account.
///
/// Obtained from [`TwilioClient::incoming_phone_numbers`].
pub struct IncomingPhoneNumberService<'a> {
    client: &'a TwilioClient,
}

impl<'a> IncomingPhoneNumberService<'a> {
    pub(super) fn new(client: &'a TwilioClient) -> Self {
        Self { client }
    }

    /// Fetch the first page of owned numbers.
    ///
    /// Pass [`RequestOption::PageSize`] to control the page length, or filters such as
    /// [`RequestOption::PhoneNumber`] and [`RequestOption::FriendlyName`].
    ///
    /// [`RequestOption::PageSize`]: crate::domain::RequestOption::PageSize
    /// [`RequestOption::PhoneNumber`]: crate::domain::RequestOption::PhoneNumber
    /// [`RequestOption::FriendlyName`]: crate::domain::RequestOption::FriendlyName
    pub async fn list(
        &self,
        options: impl Into<RequestOptions>,
    ) -> Result<IncomingPhoneNumberList, TwilioError> {
        self.fetch_list(options.into()).await
    }

    /// Fetch the page following `previous`.
    ///
    /// The request asks for page `previous.page + 1` with `previous.page_size` records and
    /// repeats the cursor's other parameters, including its filters and `PageToken`. Caller
    /// `options` of the same kind replace those values; any other options are sent alongside.
    ///
    /// Errors:
    /// - [`TwilioError::NoNextPage`] when `previous` has no next cursor (nothing is sent),
    /// - otherwise as for [`Self::list`].
    pub async fn list_next_page(
        &self,
        previous: &IncomingPhoneNumberList,
        options: impl Into<RequestOptions>,
    ) -> Result<IncomingPhoneNumberList, TwilioError> {
        let Some(cursor_options) = transport::next_page_options(previous) else {
            return Err(TwilioError::NoNextPage);
        };
        self.fetch_list(cursor_options.merge(options.into())).await
    }

    /// Fetch a single owned number by SID.
    pub async fn get(
        &self,
        sid: &IncomingPhoneNumberSid,
    ) -> Result<IncomingPhoneNumber, TwilioError> {
        let body = self
            .client
            .send(Method::Get, &instance_path(sid), Vec::new(), Vec::new())
            .await?;

        transport::decode_incoming_phone_number(&body).map_err(TwilioError::parse)
    }

    /// Release an owned number back to Twilio.
    ///
    /// Succeeds on any 2xx response; Twilio answers `204 No Content`.
    pub async fn delete(&self, sid: &IncomingPhoneNumberSid) -> Result<(), TwilioError> {
        log::info!("releasing phone number {}", sid.as_str());
        self.client
            .send(Method::Delete, &instance_path(sid), Vec::new(), Vec::new())
            .await?;
        Ok(())
    }

    async fn fetch_list(
        &self,
        options: RequestOptions,
    ) -> Result<IncomingPhoneNumberList, TwilioError> {
        let query = transport::encode_request_options(&options);
        let body = self
            .client
            .send(Method::Get, LIST_PATH, query, Vec::new())
            .await?;

        transport::decode_incoming_phone_number_list(&body).map_err(TwilioError::parse)
    }
}
