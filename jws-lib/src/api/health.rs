use serde::Deserialize;

use crate::Error;

use super::Client;

#[derive(Deserialize)]
struct Health {
    status: String,
}

pub(crate) fn get_health<C: Client>(base_url: &str) -> Result<String, Error> {
    let url = format!("{base_url}/api/health");

    let client = C::default();
    let health: Health = client.get_json(&url)?;

    Ok(health.status)
}
