use anyhow::Result;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::{Color, Stylize};
use serde_json::Value;
use std::io::Write;

/// Column names taken from the first record
pub fn column_names(data: &[Value]) -> Vec<String> {
    data.first()
        .and_then(|first| first.as_object())
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

fn cell_text(value: Option<&Value>, null_text: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) => null_text.to_string(),
        Some(v) => v.to_string(),
        None => "".to_string(),
    }
}

pub fn render_table(data: &[Value], max_rows: usize) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let fields = column_names(data);
    table.set_header(
        fields
            .iter()
            .map(|f| Cell::new(f).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    let limit = if max_rows == 0 { data.len() } else { max_rows };
    for record in data.iter().take(limit) {
        if let Some(obj) = record.as_object() {
            let row: Vec<String> = fields
                .iter()
                .map(|field| cell_text(obj.get(field), "NULL"))
                .collect();
            table.add_row(row);
        }
    }

    table
}

pub fn status_line(text: String, color: Color, use_colors: bool) -> String {
    if use_colors {
        text.with(color).to_string()
    } else {
        text
    }
}

pub fn display_results(data: &[Value], max_rows: usize, use_colors: bool) {
    if data.is_empty() {
        println!("{}", status_line("No results found.".to_string(), Color::Yellow, use_colors));
        return;
    }

    println!("{}", render_table(data, max_rows));

    let mut summary = format!("{} rows returned", data.len());
    if max_rows != 0 && data.len() > max_rows {
        summary.push_str(&format!(" ({} shown, use --format csv or json for all)", max_rows));
    }
    println!("\n{}", status_line(summary, Color::Green, use_colors));
}

pub fn write_csv<W: Write>(data: &[Value], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let headers = column_names(data);
    if headers.is_empty() {
        return Ok(());
    }
    wtr.write_record(&headers)?;

    for record in data {
        if let Some(obj) = record.as_object() {
            let row: Vec<String> = headers
                .iter()
                .map(|field| cell_text(obj.get(field), ""))
                .collect();
            wtr.write_record(&row)?;
        }
    }

    wtr.flush()?;
    Ok(())
}
