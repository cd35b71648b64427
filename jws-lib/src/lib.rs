#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]
#![doc = include_str!("../README.md")]

mod api;
mod error;
pub mod search;

pub use error::{Error, ErrorKind};

use log::trace;
use search::{SearchParams, WorksPage};

type Client = reqwest::blocking::Client;

/// Search the works published in the journal identified by the ISSN in `params`.
///
/// This is the stateless variant of [`search::SearchSession::search`]: one request against the
/// works service at `base_url` with the given form fields, returning the received page directly.
///
/// # Errors
///
/// An `Err` is returned when the ISSN is empty, when the request fails, when the service reports
/// a non-success status, or when the response body cannot be parsed.
#[inline]
pub fn works_by_issn(base_url: &str, params: &SearchParams) -> Result<WorksPage, Error> {
    trace!("Search works of journal with ISSN of '{}'", params.issn);
    api::works::get_journal_works::<Client>(base_url, params)
}

/// Report the health status of the works service at `base_url`.
///
/// # Errors
///
/// An `Err` is returned when the service is unreachable or the health response cannot be parsed.
#[inline]
pub fn service_health(base_url: &str) -> Result<String, Error> {
    trace!("Checking health of the works service at '{base_url}'");
    api::health::get_health::<Client>(base_url)
}
