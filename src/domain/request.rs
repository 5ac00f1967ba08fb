use crate::domain::value::{FriendlyName, HttpMethod, PageSize, RawPhoneNumber};

/// A parameter modifying an outgoing API call.
///
/// Options are sent as query parameters on `GET` requests and as form fields on `POST`
/// requests. Two options with the same [`RequestOptionKind`] address the same Twilio
/// parameter; see [`RequestOptions`] for how duplicates are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// Zero-based page index.
    Page(u32),
    PageSize(PageSize),
    /// Opaque paging token taken from a `next_page_uri`.
    PageToken(String),
    AreaCode(u16),
    /// Pattern matched against the number; `*` matches any single digit.
    Contains(String),
    SmsEnabled(bool),
    MmsEnabled(bool),
    VoiceEnabled(bool),
    FaxEnabled(bool),
    ExcludeAllAddressRequired(bool),
    ExcludeLocalAddressRequired(bool),
    ExcludeForeignAddressRequired(bool),
    Beta(bool),
    InRegion(String),
    InPostalCode(String),
    InLata(String),
    InRateCenter(String),
    NearNumber(RawPhoneNumber),
    /// Search radius in miles around [`RequestOption::NearNumber`] (US/CA only).
    Distance(u16),
    /// Filter for listing owned numbers; may be a partial number.
    PhoneNumber(String),
    FriendlyName(FriendlyName),
    Origin(String),
    VoiceUrl(String),
    VoiceMethod(HttpMethod),
    SmsUrl(String),
    SmsMethod(HttpMethod),
    StatusCallback(String),
}

/// Stable discriminant of a [`RequestOption`], used to de-duplicate option lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RequestOptionKind {
    Page,
    PageSize,
    PageToken,
    AreaCode,
    Contains,
    SmsEnabled,
    MmsEnabled,
    VoiceEnabled,
    FaxEnabled,
    ExcludeAllAddressRequired,
    ExcludeLocalAddressRequired,
    ExcludeForeignAddressRequired,
    Beta,
    InRegion,
    InPostalCode,
    InLata,
    InRateCenter,
    NearNumber,
    Distance,
    PhoneNumber,
    FriendlyName,
    Origin,
    VoiceUrl,
    VoiceMethod,
    SmsUrl,
    SmsMethod,
    StatusCallback,
}

impl RequestOptionKind {
    /// Parameter name Twilio expects for this option.
    pub fn field(self) -> &'static str {
        match self {
            Self::Page => "Page",
            Self::PageSize => PageSize::FIELD,
            Self::PageToken => "PageToken",
            Self::AreaCode => "AreaCode",
            Self::Contains => "Contains",
            Self::SmsEnabled => "SmsEnabled",
            Self::MmsEnabled => "MmsEnabled",
            Self::VoiceEnabled => "VoiceEnabled",
            Self::FaxEnabled => "FaxEnabled",
            Self::ExcludeAllAddressRequired => "ExcludeAllAddressRequired",
            Self::ExcludeLocalAddressRequired => "ExcludeLocalAddressRequired",
            Self::ExcludeForeignAddressRequired => "ExcludeForeignAddressRequired",
            Self::Beta => "Beta",
            Self::InRegion => "InRegion",
            Self::InPostalCode => "InPostalCode",
            Self::InLata => "InLata",
            Self::InRateCenter => "InRateCenter",
            Self::NearNumber => "NearNumber",
            Self::Distance => "Distance",
            Self::PhoneNumber => RawPhoneNumber::FIELD,
            Self::FriendlyName => FriendlyName::FIELD,
            Self::Origin => "Origin",
            Self::VoiceUrl => "VoiceUrl",
            Self::VoiceMethod => "VoiceMethod",
            Self::SmsUrl => "SmsUrl",
            Self::SmsMethod => "SmsMethod",
            Self::StatusCallback => "StatusCallback",
        }
    }
}

impl RequestOption {
    pub fn kind(&self) -> RequestOptionKind {
        match self {
            Self::Page(_) => RequestOptionKind::Page,
            Self::PageSize(_) => RequestOptionKind::PageSize,
            Self::PageToken(_) => RequestOptionKind::PageToken,
            Self::AreaCode(_) => RequestOptionKind::AreaCode,
            Self::Contains(_) => RequestOptionKind::Contains,
            Self::SmsEnabled(_) => RequestOptionKind::SmsEnabled,
            Self::MmsEnabled(_) => RequestOptionKind::MmsEnabled,
            Self::VoiceEnabled(_) => RequestOptionKind::VoiceEnabled,
            Self::FaxEnabled(_) => RequestOptionKind::FaxEnabled,
            Self::ExcludeAllAddressRequired(_) => RequestOptionKind::ExcludeAllAddressRequired,
            Self::ExcludeLocalAddressRequired(_) => RequestOptionKind::ExcludeLocalAddressRequired,
            Self::ExcludeForeignAddressRequired(_) => {
                RequestOptionKind::ExcludeForeignAddressRequired
            }
            Self::Beta(_) => RequestOptionKind::Beta,
            Self::InRegion(_) => RequestOptionKind::InRegion,
            Self::InPostalCode(_) => RequestOptionKind::InPostalCode,
            Self::InLata(_) => RequestOptionKind::InLata,
            Self::InRateCenter(_) => RequestOptionKind::InRateCenter,
            Self::NearNumber(_) => RequestOptionKind::NearNumber,
            Self::Distance(_) => RequestOptionKind::Distance,
            Self::PhoneNumber(_) => RequestOptionKind::PhoneNumber,
            Self::FriendlyName(_) => RequestOptionKind::FriendlyName,
            Self::Origin(_) => RequestOptionKind::Origin,
            Self::VoiceUrl(_) => RequestOptionKind::VoiceUrl,
            Self::VoiceMethod(_) => RequestOptionKind::VoiceMethod,
            Self::SmsUrl(_) => RequestOptionKind::SmsUrl,
            Self::SmsMethod(_) => RequestOptionKind::SmsMethod,
            Self::StatusCallback(_) => RequestOptionKind::StatusCallback,
        }
    }

    /// Parameter name Twilio expects for this option.
    pub fn field(&self) -> &'static str {
        self.kind().field()
    }
}

/// Ordered list of [`RequestOption`]s holding at most one option per kind.
///
/// Setting an option whose kind is already present replaces it in place, so the last
/// write wins while the original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    options: Vec<RequestOption>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `option`, replacing any existing option of the same kind.
    pub fn set(&mut self, option: RequestOption) {
        let kind = option.kind();
        match self.options.iter_mut().find(|it| it.kind() == kind) {
            Some(existing) => *existing = option,
            None => self.options.push(option),
        }
    }

    /// Builder-style [`RequestOptions::set`].
    pub fn with(mut self, option: RequestOption) -> Self {
        self.set(option);
        self
    }

    /// Apply every option from `overrides`; overrides win over options of the same kind.
    pub fn merge(mut self, overrides: RequestOptions) -> Self {
        for option in overrides.options {
            self.set(option);
        }
        self
    }

    pub fn get(&self, kind: RequestOptionKind) -> Option<&RequestOption> {
        self.options.iter().find(|it| it.kind() == kind)
    }

    pub fn contains(&self, kind: RequestOptionKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequestOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<RequestOption> for RequestOptions {
    fn from_iter<I: IntoIterator<Item = RequestOption>>(iter: I) -> Self {
        let mut options = Self::new();
        for option in iter {
            options.set(option);
        }
        options
    }
}

impl From<Vec<RequestOption>> for RequestOptions {
    fn from(value: Vec<RequestOption>) -> Self {
        value.into_iter().collect()
    }
}

impl From<RequestOption> for RequestOptions {
    fn from(value: RequestOption) -> Self {
        Self::new().with(value)
    }
}

impl<'a> IntoIterator for &'a RequestOptions {
    type Item = &'a RequestOption;
    type IntoIter = std::slice::Iter<'a, RequestOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
