use log::{info, trace};
use serde::Deserialize;

use crate::{
    search::{SearchParams, Work, WorksPage},
    Error, ErrorKind,
};

use super::{Client, HttpResponse};

#[derive(Deserialize)]
struct WorksBody {
    #[serde(default)]
    items: Vec<Work>,
    count: Option<u64>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

pub(crate) fn get_journal_works<C: Client>(
    base_url: &str,
    params: &SearchParams,
) -> Result<WorksPage, Error> {
    if params.issn.is_empty() {
        return Err(Error::new(ErrorKind::Input, "ISSN is required."));
    }

    info!("Searching works of journal with ISSN '{}'", params.issn);
    let url = format!(
        "{base_url}/api/journals/{issn}/works{query}",
        issn = params.issn,
        query = params.query_string(),
    );

    let client = C::default();
    let resp = client.get_response(&url)?;

    if !resp.is_success() {
        return Err(error_from_response(&resp));
    }

    trace!("Request was successful");

    let WorksBody { items, count } = resp.json()?;
    Ok(WorksPage {
        items,
        matched: count,
    })
}

// Non-success bodies optionally carry a `detail` string with a human readable message, anything
// else falls back to the status code.
fn error_from_response(resp: &HttpResponse) -> Error {
    let detail = resp.json::<ErrorBody>().ok().and_then(|body| body.detail);

    match detail {
        Some(detail) => Error::new(ErrorKind::Api, detail),
        None => Error::new(
            ErrorKind::Api,
            format!("HTTP error! status: {}", resp.status()),
        ),
    }
}
