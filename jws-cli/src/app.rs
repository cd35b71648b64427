use eyre::Result;
use jws::search::{SearchSession, Work, WorksPage};

use crate::interact;

/// Drives the search form in a prompt, search, reset loop until the user is done.
pub fn interactive_search(session: &mut SearchSession) -> Result<String> {
    let mut searches = 0_u32;

    loop {
        fill_form(session)?;
        session.search();

        if session.error().is_empty() {
            searches += 1;
            println!("{}", render_results(session));
        } else {
            println!("Search failed: {}", session.error());
        }

        if interact::user_confirm("Reset the form and search again?")? {
            session.reset();
        } else {
            return Ok(format!("Finished after {searches} successful search(es)"));
        }
    }
}

fn fill_form(session: &mut SearchSession) -> Result<()> {
    let params = &mut session.params;

    params.issn = interact::user_input("ISSN")?;
    params.query = interact::user_optional_input("Search text (optional)")?.unwrap_or_default();
    params.from_year = interact::user_optional_number("From year (optional)")?;
    params.sort = interact::user_optional_input("Sort field (optional)")?.unwrap_or_default();
    params.order = interact::user_optional_input("Sort order (optional)")?.unwrap_or_default();

    if let Some(max_items) = interact::user_optional_number("Max items (optional)")? {
        params.max_items = Some(max_items);
    }

    params.mailto = interact::user_optional_input("Mailto (optional)")?.unwrap_or_default();

    Ok(())
}

#[must_use]
pub fn render_page(page: &WorksPage) -> String {
    let mut out = list_works(&page.items);

    match page.matched {
        Some(matched) => out.push_str(&format!(
            "Received {} of {matched} matching works",
            page.items.len()
        )),
        None => out.push_str(&format!("Received {} works", page.items.len())),
    }

    out
}

fn render_results(session: &SearchSession) -> String {
    let mut out = list_works(session.results());
    out.push_str(&format!(
        "Received {} works",
        session.total().unwrap_or_default()
    ));
    out
}

fn list_works(works: &[Work]) -> String {
    works
        .iter()
        .enumerate()
        .map(|(i, work)| format!("{:>3}. {}\n", i + 1, work_line(work)))
        .collect()
}

// Works are schemaless JSON, the few fields worth a terminal line are picked out here and
// anything missing is skipped.
fn work_line(work: &Work) -> String {
    let mut line = work["title"][0]
        .as_str()
        .unwrap_or("Untitled work")
        .to_owned();

    if let Some(year) = work["issued"]["date-parts"][0][0].as_u64() {
        line.push_str(&format!(" ({year})"));
    }

    if let Some(doi) = work["DOI"].as_str() {
        line.push_str(&format!(" [doi:{doi}]"));
    }

    line
}
