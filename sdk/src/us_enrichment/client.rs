use serde_json::Value;

use super::lookup::Lookup;
use super::response::EnrichmentResponse;
use crate::client::{Endpoint, LookupClient, PathTemplate, PreparedSend};
use crate::errors::SdkError;
use crate::payload::decode_first;
use crate::request::Method;
use crate::sender::Sender;

pub static PRINCIPAL: Endpoint<Lookup> = Endpoint {
    name: "principal",
    method: Method::Get,
    path: PathTemplate::KeySuffix("property/principal"),
    attach: attach_principal,
};

pub static FINANCIAL: Endpoint<Lookup> = Endpoint {
    name: "financial",
    method: Method::Get,
    path: PathTemplate::KeySuffix("property/financial"),
    attach: attach_financial,
};

pub static GEO: Endpoint<Lookup> = Endpoint {
    name: "geo",
    method: Method::Get,
    path: PathTemplate::KeySuffix("geo-reference"),
    attach: attach_geo,
};

fn attach_principal(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.response = Some(EnrichmentResponse::Principal(decode_first(payload)?));
    Ok(())
}

fn attach_financial(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.response = Some(EnrichmentResponse::Financial(decode_first(payload)?));
    Ok(())
}

fn attach_geo(lookup: &mut Lookup, payload: Value) -> Result<(), SdkError> {
    lookup.response = Some(EnrichmentResponse::Geo(decode_first(payload)?));
    Ok(())
}

/// Client for the US property enrichment API.
///
/// Each `send_*` validates synchronously and returns a [`PreparedSend`];
/// awaiting it performs the request and fills `lookup.response`.
pub struct Client<S> {
    inner: LookupClient<S>,
}

impl<S: Sender> Client<S> {
    pub const fn new(sender: S) -> Self {
        Self {
            inner: LookupClient::new(sender),
        }
    }

    /// `GET <smarty_key>/property/principal`
    ///
    /// # Errors
    /// [`SdkError::UndefinedLookup`] when `lookup` is `None`.
    pub fn send_principal<'a>(
        &'a self,
        lookup: Option<&'a mut Lookup>,
    ) -> Result<PreparedSend<'a, S, Lookup>, SdkError> {
        self.inner.prepare(&PRINCIPAL, lookup)
    }

    /// `GET <smarty_key>/property/financial`
    ///
    /// # Errors
    /// [`SdkError::UndefinedLookup`] when `lookup` is `None`.
    pub fn send_financial<'a>(
        &'a self,
        lookup: Option<&'a mut Lookup>,
    ) -> Result<PreparedSend<'a, S, Lookup>, SdkError> {
        self.inner.prepare(&FINANCIAL, lookup)
    }

    /// `GET <smarty_key>/geo-reference`
    ///
    /// # Errors
    /// [`SdkError::UndefinedLookup`] when `lookup` is `None`.
    pub fn send_geo<'a>(
        &'a self,
        lookup: Option<&'a mut Lookup>,
    ) -> Result<PreparedSend<'a, S, Lookup>, SdkError> {
        self.inner.prepare(&GEO, lookup)
    }

    #[must_use]
    pub const fn sender(&self) -> &S {
        self.inner.sender()
    }
}
