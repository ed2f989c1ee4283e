//! Interactive directory browser: drives a `SessionController` from line
//! commands and renders the ordered results plus the count label, standing
//! in for the web UI layer.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use bizdir_core::config::AppConfig;
use bizdir_core::store::RecordStore;
use bizdir_core::types::SortKey;
use bizdir_core::view::ResultView;
use bizdir_session::SessionController;
use tokio::io::{AsyncBufReadExt, BufReader};

const DEMO_RECORDS: &str = include_str!("../../data/companies.json");

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = AppConfig::load()?;
    let store = match config.records_path() {
        Some(path) => load_records(&path)?,
        None => RecordStore::from_json(DEMO_RECORDS).context("bundled demo records are invalid")?,
    };

    println!("🏢 bizdir-browse\n================");
    println!("Loaded {} companies. Type 'help' for commands.", store.len());

    let (mut controller, mut refresh) =
        SessionController::new(store, Duration::from_millis(config.debounce_ms));
    render(&controller.results());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(&mut controller, line.trim()) {
                    break;
                }
            }
            Some(_) = refresh.recv() => {
                render(&controller.results());
            }
        }
    }
    Ok(())
}

fn load_records(path: &Path) -> Result<RecordStore> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read record file {}", path.display()))?;
    RecordStore::from_json(&json)
        .with_context(|| format!("invalid record file {}", path.display()))
}

/// Applies one line command. Returns false when the session should end.
fn handle_command(controller: &mut SessionController, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command {
        "" => {}
        "search" => controller.on_search_input(rest),
        "cat" => {
            if rest.is_empty() {
                println!("Usage: cat <category>");
            } else {
                controller.toggle_category(rest);
            }
        }
        "loc" => controller.set_location(non_empty(rest)),
        "size" => controller.set_size(non_empty(rest)),
        "rating" => match rest.parse::<f64>() {
            Ok(min_rating) => controller.set_min_rating(min_rating),
            Err(_) => println!("Usage: rating <number>, e.g. rating 4.0"),
        },
        "premium" => {
            let premium_only = !controller.criteria().premium_only;
            controller.set_premium_only(premium_only);
        }
        "sort" => controller.set_sort_key(SortKey::from_label(rest)),
        "apply" => {
            controller.apply_filters();
            println!("✅ Filters applied!");
        }
        "clear" => {
            controller.clear_filters();
            println!("🧹 Filters cleared!");
        }
        "list" => render(&controller.results()),
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => println!("Unknown command '{other}'. Type 'help' for commands."),
    }
    true
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn render(view: &ResultView<'_>) {
    println!("\n🔍 {}", view.summary());
    for (i, record) in view.iter().enumerate() {
        let premium = if record.premium { "  ⭐ premium" } else { "" };
        println!(
            "  {}. {}  [{} | {} | {}]  rating {:.1}{}",
            i + 1,
            record.name,
            record.category,
            record.location,
            record.size,
            record.rating,
            premium
        );
    }
}

fn print_help() {
    println!("Commands:");
    println!("  search <text>   live text search over name, category, location (debounced)");
    println!("  cat <name>      toggle a category in the multi-select");
    println!("  loc [<value>]   set the location filter; no value clears it");
    println!("  size [<value>]  set the size filter; no value clears it");
    println!("  rating <n>      set the minimum rating");
    println!("  premium         toggle premium-only");
    println!("  sort <key>      relevance | rating-desc | rating-asc | name-asc | name-desc");
    println!("  apply           re-apply the current filters");
    println!("  clear           reset all filters");
    println!("  list            print the current results");
    println!("  quit            exit");
}
