use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

use super::{Auth, BoxFuture, HttpRequest, HttpResponse, HttpTransport, TwilioClient};

pub const ACCOUNT_SID: &str = "AC0123456789abcdef0123456789abcdef";
pub const AUTH_TOKEN: &str = "test_token";

#[derive(Clone)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

struct FakeTransportState {
    requests: Vec<HttpRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status: response_status,
            body: response_body.into(),
        }))
    }

    /// Every request fails before reaching a server.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                requests: Vec::new(),
                response,
            })),
        }
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl HttpTransport for FakeTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state.response.clone()
            };
            response.map_err(Into::into)
        })
    }
}

pub fn make_client(transport: FakeTransport) -> TwilioClient {
    TwilioClient {
        auth: Auth::auth_token(ACCOUNT_SID, AUTH_TOKEN).unwrap(),
        base_url: "https://example.invalid/2010-04-01".to_owned(),
        http: Arc::new(transport),
    }
}

pub fn assert_param(params: &[(String, String)], key: &str, value: &str) {
    assert!(
        params.iter().any(|(k, v)| k == key && v == value),
        "missing param {key}={value}; got: {params:?}"
    );
}
