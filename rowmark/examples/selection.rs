//! Selection Example
//!
//! Drives a paginated table the way a grid widget would: page checkbox,
//! row checkboxes, the all-pages checkbox, validation and removal.
//! Log output goes to `selection.log`.

use std::fs::File;

use rowmark::prelude::*;
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};

const PAGE_SIZE: usize = 3;

/// Create sample orders for the table.
fn create_sample_orders() -> Vec<Value> {
    let customers = ["Contoso", "Fabrikam", "Northwind", "Tailspin"];
    (1..=7)
        .map(|i| {
            let quantity = if i % 4 == 0 { 0 } else { i * 2 };
            json!({
                "id": i,
                "customer": customers[i % customers.len()],
                "quantity": quantity,
            })
        })
        .collect()
}

/// Dataset indices on the given page.
fn page(table: &Table<Value>, number: usize) -> Vec<usize> {
    let start = number * PAGE_SIZE;
    (start..(start + PAGE_SIZE).min(table.data().len())).collect()
}

fn validate_quantity(row: &Value) -> Vec<CellError> {
    match row["quantity"].as_u64() {
        Some(0) => vec![CellError::with_code("quantity", "must be at least 1", "E_QTY")],
        Some(_) => Vec::new(),
        None => vec![CellError::new("quantity", "missing")],
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("selection.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut table = Table::with_rows(TableConfig::new("orders"), create_sample_orders());
    table.on_selection(|event| match event {
        SelectionEvent::Change(rows) => println!("{}: {} row(s)", event.name(), rows.len()),
        SelectionEvent::Select(row) => println!("{}: order {}", event.name(), row["id"]),
        SelectionEvent::CurrentPage(any) | SelectionEvent::AllPage(any) => {
            println!("{}: {}", event.name(), any)
        }
    });
    table.on_store(|event| println!("store: {:?}", event));

    let first_page = page(&table, 0);
    table.set_view(first_page);
    table.check_page(true);
    table
        .check_row(1, false)
        .expect("row 1 is on the first page");
    println!("header: {:?}", table.header().indicator());

    table.check_all(true);
    println!("header: {:?}", table.header().indicator());

    let invalid = table.store_mut().validate(validate_quantity);
    println!("{} invalid order(s)", invalid);
    for error_row in table.error_rows() {
        let messages: Vec<String> = table
            .store()
            .status(error_row.index)
            .map(|s| s.errors.iter().map(ToString::to_string).collect())
            .unwrap_or_default();
        println!("  order {}: {}", error_row.data["id"], messages.join(", "));
    }

    let bad: Vec<Value> = table
        .error_rows()
        .into_iter()
        .filter_map(|e| e.data.get("id").cloned())
        .collect();
    table.remove_items_by_key(&bad);
    table.add_item(json!({"id": 8, "customer": "Contoso", "quantity": 1}));

    let second_page = page(&table, 1);
    table.set_view(second_page);
    let summary = table.toggle(SelectionScope::Current, None);
    println!(
        "page 2: {} selected, all checked: {}, header: {:?}",
        summary.selected, summary.all_checked, summary.indicator
    );

    Ok(())
}
