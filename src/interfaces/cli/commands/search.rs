//! Product search command

use std::sync::Arc;

use colored::Colorize;

use super::render::product_item_lines;
use crate::client::CatalogApi;
use crate::config::get_config;
use crate::interfaces::cli::{CliError, next_event};
use crate::page::{Page, PageLayout, PageSettings};

pub async fn search_products(api: Arc<dyn CatalogApi>, term: &str) -> Result<(), CliError> {
    let settings = PageSettings::from(&get_config().ui);
    let (mut page, mut events) = Page::new(api, settings, PageLayout::products());
    page.load_products(term);

    let event = next_event(&mut events).await?;
    page.apply(event);

    let Some(list) = page.product_list() else {
        return Err(CliError::CommandError("product list missing".to_string()));
    };

    if let Some(message) = list.message() {
        println!("{} {}", "ℹ".bold().blue(), message);
        return Ok(());
    }

    if term.is_empty() {
        println!("{}", "Products:".bold().green());
    } else {
        println!("{} {}", "Products matching".bold().green(), term.cyan());
    }
    println!();
    for item in list.items() {
        let mut lines = product_item_lines(item).into_iter();
        if let Some(title) = lines.next() {
            println!("  {}", title.bold().cyan());
        }
        for line in lines {
            println!("    {}", line);
        }
    }
    println!();
    println!(
        "{} Total {} products",
        "ℹ".bold().blue(),
        list.items().len().to_string().green()
    );
    Ok(())
}
