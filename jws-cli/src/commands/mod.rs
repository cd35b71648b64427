use crate::app;

use jws::search::{SearchParams, SearchSession, DEFAULT_MAX_ITEMS};

use clap::Subcommand;
use log::trace;

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search the works published in a journal by its ISSN
    ///
    /// In interactive mode the search form is filled in through prompts and can be reset and
    /// submitted again without leaving the program.
    Works {
        /// The ISSN of the journal to search, e.g. 2167-8359
        ///
        /// Optional in interactive mode where it is asked for instead.
        issn: Option<String>,

        /// Free text to search for within the works of the journal
        #[clap(long)]
        query: Option<String>,

        /// Only include works with an online publication date from this year onwards
        #[clap(long)]
        from_year: Option<u16>,

        /// Field to sort results by, e.g. 'published'
        #[clap(long)]
        sort: Option<String>,

        /// Sort order, 'asc' or 'desc'
        #[clap(long)]
        order: Option<String>,

        /// Maximum number of works to return, 0 for none
        #[clap(long, default_value_t = DEFAULT_MAX_ITEMS)]
        max_items: u32,

        /// Also report the number of matching works held by the service
        #[clap(long)]
        count: bool,

        /// Contact email forwarded to the upstream API
        #[clap(long)]
        mailto: Option<String>,
    },

    /// Check that the works service is up and reachable
    Health,
}

impl Commands {
    pub fn execute(
        self,
        base_url: &str,
        interact: bool,
    ) -> Result<String, Box<dyn std::error::Error>> {
        match self {
            Commands::Works {
                issn,
                query,
                from_year,
                sort,
                order,
                max_items,
                count,
                mailto,
            } => {
                if interact {
                    let mut session = SearchSession::new(base_url);
                    let message = app::interactive_search(&mut session)?;
                    Ok(message)
                } else {
                    let params = SearchParams {
                        issn: issn.unwrap_or_default(),
                        query: query.unwrap_or_default(),
                        from_year,
                        sort: sort.unwrap_or_default(),
                        order: order.unwrap_or_default(),
                        max_items: Some(max_items),
                        count,
                        mailto: mailto.unwrap_or_default(),
                    };

                    let page = jws::works_by_issn(base_url, &params)?;
                    Ok(app::render_page(&page))
                }
            }
            Commands::Health => {
                trace!("Checking the works service health..");
                let status = jws::service_health(base_url)?;
                Ok(format!("Works service at {base_url} is {status}"))
            }
        }
    }
}
