use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::info;

use mediatrie::{Browser, Item};

use crate::cli::{Cli, Command};

mod output;
mod settings;

pub fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => settings::load_settings_from(path)?,
        None => settings::load_settings(),
    };

    let browser = || Browser::from_settings(&settings);

    match cli.command {
        Command::Config => {
            let text =
                toml::to_string_pretty(&settings).context("Failed to serialize settings")?;
            print!("{text}");
        }
        Command::Root => print_item(&browser().root(), cli.json)?,
        Command::Item { id } => match browser().item(&id) {
            Some(item) => print_item(&item, cli.json)?,
            None => bail!("item not found: {id}"),
        },
        Command::Children {
            path,
            page,
            page_size,
        } => {
            let browser = browser();
            let page_size = page_size.unwrap_or_else(|| browser.default_page_size());
            let items = browser.children(&path, page, page_size);
            info!(path = %path, page, count = items.len(), "listed children");
            print_items(&items, cli.json)?;
        }
        Command::Tree => {
            for line in output::tree_lines(browser().index()) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn print_item(item: &Item, json: bool) -> Result<()> {
    if json {
        return print_json(item);
    }
    println!("{}", output::item_line(item));
    Ok(())
}

fn print_items(items: &[Item], json: bool) -> Result<()> {
    if json {
        return print_json(items);
    }
    for item in items {
        println!("{}", output::item_line(item));
    }
    Ok(())
}
