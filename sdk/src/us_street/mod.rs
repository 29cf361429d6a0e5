//! US street address validation, one lookup per request.

mod types;

use serde::Serialize;
use serde_json::Value;

use crate::client::{self, Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode_list;
use crate::request::{Method, Parameters};
use crate::sender::Sender;

pub use types::{Analysis, Candidate, Components, MatchStrategy, Metadata};

pub const DEFAULT_BASE_URL: &str = "https://us-street.api.smarty.com/street-address";

/// Candidates requested when the enhanced strategy is used without an
/// explicit `candidates` value.
pub const ENHANCED_DEFAULT_CANDIDATES: u32 = 5;

/// A street address to validate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lookup {
    pub street: Option<String>,
    pub street2: Option<String>,
    pub secondary: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub lastline: Option<String>,
    pub addressee: Option<String>,
    pub urbanization: Option<String>,
    pub match_strategy: Option<MatchStrategy>,
    pub candidates: Option<u32>,
    pub input_id: Option<String>,
    pub result: Vec<Candidate>,
}

impl Lookup {
    pub fn new(street: impl Into<String>) -> Self {
        Self {
            street: Some(street.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use]
    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    #[must_use]
    pub fn with_match_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = Some(strategy);
        self
    }

    #[must_use]
    pub fn with_candidates(mut self, candidates: u32) -> Self {
        self.candidates = Some(candidates);
        self
    }

    fn effective_candidates(&self) -> Option<u32> {
        match (self.candidates, self.match_strategy) {
            (None, Some(MatchStrategy::Enhanced)) => Some(ENHANCED_DEFAULT_CANDIDATES),
            (candidates, _) => candidates,
        }
    }
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("street", self.street.as_deref())
            .with("street2", self.street2.as_deref())
            .with("secondary", self.secondary.as_deref())
            .with("city", self.city.as_deref())
            .with("state", self.state.as_deref())
            .with("zipcode", self.zipcode.as_deref())
            .with("lastline", self.lastline.as_deref())
            .with("addressee", self.addressee.as_deref())
            .with("urbanization", self.urbanization.as_deref())
            .with_display("match", self.match_strategy)
            .with_display("candidates", self.effective_candidates())
            .with("input_id", self.input_id.as_deref())
    }
}

pub static VERIFY: Endpoint<Lookup> = Endpoint {
    name: "street-address",
    method: Method::Get,
    path: PathTemplate::Root,
    attach: attach_candidates,
};

fn attach_candidates(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.result = decode_list(payload)?;
    Ok(())
}

/// Client for the US street API.
pub struct Client<S> {
    inner: LookupClient<S>,
}

impl<S: Sender> Client<S> {
    pub const fn new(sender: S) -> Self {
        Self {
            inner: LookupClient::new(sender),
        }
    }

    /// # Errors
    /// [`SdkError::UndefinedLookup`] when `lookup` is `None`.
    pub fn send<'a>(
        &'a self,
        lookup: Option<&'a mut Lookup>,
    ) -> Result<PreparedSend<'a, S, Lookup>, SdkError> {
        self.inner.prepare(&VERIFY, lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Lookup as _;

    #[test]
    fn test_parameters_use_api_names() {
        let lookup = Lookup {
            street: Some("1600 Amphitheatre Pkwy".into()),
            lastline: Some("Mountain View CA".into()),
            input_id: Some("id-1".into()),
            ..Lookup::default()
        };
        assert_eq!(
            lookup.parameters(),
            Parameters::from_iter([
                ("street", "1600 Amphitheatre Pkwy"),
                ("lastline", "Mountain View CA"),
                ("input_id", "id-1"),
            ])
        );
    }

    #[test]
    fn test_enhanced_match_defaults_candidates() {
        let lookup = Lookup::new("1 Main").with_match_strategy(MatchStrategy::Enhanced);
        let params = lookup.parameters();
        assert_eq!(params.get("match"), Some("enhanced"));
        assert_eq!(params.get("candidates"), Some("5"));
    }

    #[test]
    fn test_explicit_candidates_win() {
        let lookup = Lookup::new("1 Main")
            .with_match_strategy(MatchStrategy::Enhanced)
            .with_candidates(2);
        assert_eq!(lookup.parameters().get("candidates"), Some("2"));

        let strict = Lookup::new("1 Main").with_match_strategy(MatchStrategy::Strict);
        assert_eq!(strict.parameters().get("candidates"), None);
        assert_eq!(strict.parameters().get("match"), Some("strict"));
    }
}
