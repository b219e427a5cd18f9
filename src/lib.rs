pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod grid;
pub mod model;

use reqwest::Client;
use tracing::{debug, info, warn};

pub use config::Config;
pub use error::{MenuError, StructureError};
pub use filter::filter_lines;
pub use grid::{Template, WEEKLY_TEMPLATE, reconstruct};
pub use model::{DailyMenu, DateToken, LunchMenu, Section, WeeklyMenu};

/// Filters the extracted page text and rebuilds the weekly grid from it.
pub fn parse_menu_text(text: &str, template: &Template) -> Result<WeeklyMenu, StructureError> {
    let raw: Vec<&str> = text.lines().collect();
    for (index, line) in raw.iter().enumerate() {
        debug!(index, line, "raw line");
    }

    let filtered = filter_lines(&raw);
    for (index, line) in filtered.iter().enumerate() {
        debug!(index, line, "filtered line");
    }

    match reconstruct(&filtered, template) {
        Ok(menu) => {
            info!(days = menu.len(), lines = filtered.len(), "parsed weekly menu");
            Ok(menu)
        }
        Err(err) => {
            warn!(error = %err, code = err.code(), "menu did not match the weekly template");
            Err(err)
        }
    }
}

pub async fn fetch_weekly_menu(
    client: &Client,
    url: &str,
    template: &Template,
) -> Result<WeeklyMenu, MenuError> {
    let text = fetch::download_and_extract_text(client, url).await?;
    Ok(parse_menu_text(&text, template)?)
}
