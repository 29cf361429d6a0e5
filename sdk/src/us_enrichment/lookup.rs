use serde::Serialize;

use super::response::EnrichmentResponse;
use crate::client;
use crate::request::Parameters;

/// A property-enrichment request for one Smarty key.
///
/// The filters are sent only when set and non-empty. `response` is written
/// by the client after a successful send; sending the same lookup again
/// replaces it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lookup {
    pub smarty_key: String,
    pub include: Option<String>,
    pub exclude: Option<String>,
    pub dataset: Option<String>,
    pub data_subset: Option<String>,
    pub response: Option<EnrichmentResponse>,
}

impl Lookup {
    pub fn new(smarty_key: impl Into<String>) -> Self {
        Self {
            smarty_key: smarty_key.into(),
            ..Self::default()
        }
    }

    /// Positional constructor: key, include, exclude, dataset, data subset.
    #[must_use]
    pub fn from_parts(
        smarty_key: &str,
        include: Option<&str>,
        exclude: Option<&str>,
        dataset: Option<&str>,
        data_subset: Option<&str>,
    ) -> Self {
        Self {
            smarty_key: smarty_key.to_string(),
            include: include.map(String::from),
            exclude: exclude.map(String::from),
            dataset: dataset.map(String::from),
            data_subset: data_subset.map(String::from),
            response: None,
        }
    }

    #[must_use]
    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: impl Into<String>) -> Self {
        self.exclude = Some(exclude.into());
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    #[must_use]
    pub fn with_data_subset(mut self, data_subset: impl Into<String>) -> Self {
        self.data_subset = Some(data_subset.into());
        self
    }
}

impl client::Lookup for Lookup {
    fn parameters(&self) -> Parameters {
        Parameters::new()
            .with("include", self.include.as_deref())
            .with("exclude", self.exclude.as_deref())
            .with("dataset", self.dataset.as_deref())
            .with("data_subset", self.data_subset.as_deref())
    }

    fn path_key(&self) -> Option<&str> {
        Some(&self.smarty_key)
    }
}
