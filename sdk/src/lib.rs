#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

//! Typed clients for the Smarty address and property APIs.
//!
//! Every family module exposes a `Lookup`, its response types and a
//! `Client<S>` generic over a [`Sender`]. [`ClientBuilder`] wires clients to
//! the HTTP sender from credentials or an [`SdkConfig`].

pub mod builder;
pub mod client;
pub mod config;
pub mod errors;
pub mod payload;
pub mod request;
pub mod sender;

pub mod international_autocomplete;
pub mod international_street;
pub mod us_autocomplete_pro;
pub mod us_enrichment;
pub mod us_extract;
pub mod us_reverse_geo;
pub mod us_street;
pub mod us_zipcode;

pub use builder::ClientBuilder;
pub use config::{ConfigError, SdkConfig};
pub use errors::SdkError;
pub use request::{Body, Method, Parameters, Request};
pub use sender::{Credentials, HttpSender, Sender};
