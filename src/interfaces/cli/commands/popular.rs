//! Popular products slideshow command

use std::sync::Arc;

use colored::Colorize;

use super::render::slide_lines;
use crate::client::CatalogApi;
use crate::config::get_config;
use crate::interfaces::cli::{CliError, next_event};
use crate::page::{Page, PageLayout, PageSettings};

pub async fn show_popular(api: Arc<dyn CatalogApi>, watch: bool) -> Result<(), CliError> {
    let settings = PageSettings::from(&get_config().ui);
    let (mut page, mut events) = Page::new(api, settings, PageLayout::homepage());
    page.on_load();

    let event = next_event(&mut events).await?;
    page.apply(event);
    print_slideshow(&page);

    // 空列表或出错时不会启动轮播
    if !watch || page.current_slide().is_none() {
        return Ok(());
    }

    loop {
        let event = next_event(&mut events).await?;
        page.apply(event);
        println!();
        print_slideshow(&page);
    }
}

fn print_slideshow(page: &Page) {
    match page.current_slide() {
        Some(slide) => {
            let mut lines = slide_lines(&slide).into_iter();
            if let Some(name) = lines.next() {
                println!("{}", name.bold().cyan());
            }
            for line in lines {
                println!("  {}", line);
            }
        }
        None => {
            let message = page
                .slideshow()
                .and_then(|s| s.message())
                .unwrap_or_default();
            println!("{} {}", "ℹ".bold().blue(), message);
        }
    }
}
