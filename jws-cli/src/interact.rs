use std::str::FromStr;

use dialoguer::{Confirm, Input};
use eyre::{eyre, Context, Result};

pub fn user_input(prompt: &str) -> Result<String> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

pub fn user_optional_input(prompt: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))?;

    Ok(Some(input).filter(|input| !input.is_empty()))
}

pub fn user_optional_number<N: FromStr>(prompt: &str) -> Result<Option<N>> {
    match user_optional_input(prompt)? {
        Some(input) => input
            .parse()
            .map(Some)
            .map_err(|_| eyre!("'{input}' is not a valid number")),
        None => Ok(None),
    }
}

pub fn user_confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .wrap_err_with(|| eyre!("User confirmation cancelled"))
}
