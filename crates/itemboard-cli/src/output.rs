//! Output renderers and formatting helpers for CLI commands.

use anyhow::anyhow;
use itemboard_api_models::{HealthResponse, Item, ItemListResponse};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    println!("{text}");
    Ok(())
}

pub(crate) fn render_item_list(list: &ItemListResponse, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(list),
        OutputFormat::Table => {
            print!("{}", format_item_table(list));
            Ok(())
        }
    }
}

pub(crate) fn render_item(item: &Item, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(item),
        OutputFormat::Table => {
            println!("id: {}", item.id);
            println!("name: {}", item.name);
            println!("created: {}", format_created(item));
            Ok(())
        }
    }
}

pub(crate) fn render_health(health: &HealthResponse, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Json => print_json(health),
        OutputFormat::Table => {
            println!("status: {}", health.status_label());
            Ok(())
        }
    }
}

pub(crate) fn format_item_table(list: &ItemListResponse) -> String {
    let mut out = format!("{:>8} {:<20} NAME\n", "ID", "CREATED");
    for item in &list.items {
        out.push_str(&format!(
            "{:>8} {:<20} {}\n",
            item.id,
            format_created(item),
            item.name
        ));
    }
    if list.items.is_empty() {
        out.push_str("(no items)\n");
    }
    let noun = if list.total == 1 { "item" } else { "items" };
    out.push_str(&format!(
        "page {}/{} ({} {noun})\n",
        list.page,
        list.pages.max(1),
        list.total
    ));
    out
}

fn format_created(item: &Item) -> String {
    item.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn table_lists_rows_and_page_summary() {
        let list = ItemListResponse {
            items: vec![item(2, "Beta"), item(1, "Alpha")],
            page: 1,
            pages: 1,
            total: 2,
            limit: 10,
        };
        let table = format_item_table(&list);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("2025-01-02 03:04:05  Beta"));
        assert!(lines[2].ends_with("Alpha"));
        assert_eq!(lines[3], "page 1/1 (2 items)");
    }

    #[test]
    fn empty_table_reports_no_items() {
        let list = ItemListResponse {
            items: Vec::new(),
            page: 1,
            pages: 0,
            total: 0,
            limit: 10,
        };
        let table = format_item_table(&list);
        assert!(table.contains("(no items)"));
        assert!(table.ends_with("page 1/1 (0 items)\n"));
    }
}
