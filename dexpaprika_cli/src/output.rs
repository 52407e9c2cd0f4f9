use anyhow::Result;
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

/// A list of records to render as one table.
#[derive(Debug)]
struct Section<'a> {
    title: Option<&'a str>,
    rows: Vec<&'a Map<String, Value>>,
}

/// Prints an API response in the requested format.
pub fn print_value(value: &Value, format: &OutputFormat) -> Result<()> {
    print_page_info(value);

    if let OutputFormat::Json = format {
        print_json(value);
        return Ok(());
    }

    let sections = build_sections(value);
    if sections.is_empty() {
        // Scalars have no tabular form.
        print_json(value);
        return Ok(());
    }

    let titled = sections.len() > 1;
    for (i, section) in sections.iter().enumerate() {
        if titled {
            if i > 0 {
                println!();
            }
            println!("{}", section.title.unwrap_or("results"));
        }
        if section.rows.is_empty() {
            println!("(none)");
            continue;
        }
        let (headers, rows) = build_rows(section);
        match format {
            OutputFormat::Csv => print_csv(&headers, &rows)?,
            OutputFormat::Markdown => {
                let mut table = build_table(&headers, &rows);
                table.with(Style::markdown());
                println!("{}", table);
            }
            _ => println!("{}", build_table(&headers, &rows)),
        }
    }
    Ok(())
}

pub fn print_json(data: &Value) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn print_page_info(value: &Value) {
    if let Some(info) = value.get("page_info") {
        eprintln!(
            "Page {}/{} ({} total)",
            cell(info.get("page")),
            cell(info.get("total_pages")),
            cell(info.get("total_items"))
        );
    }
}

// -- Row builders --

/// Splits a response into tables.
///
/// A top-level array is one table. An object holding only arrays and nested
/// objects (a listing such as `{"pools": [...], "page_info": {...}}` or search
/// results) gives one table per array of records. Any other object is a
/// single record.
fn build_sections(value: &Value) -> Vec<Section<'_>> {
    match value {
        Value::Array(items) => vec![Section {
            title: None,
            rows: records(items),
        }],
        Value::Object(map) => {
            let is_container = map.values().all(|v| v.is_array() || v.is_object());
            if !is_container {
                return vec![Section {
                    title: None,
                    rows: vec![map],
                }];
            }
            let sections: Vec<Section<'_>> = map
                .iter()
                .filter_map(|(key, v)| match v {
                    Value::Array(items) if items.iter().all(Value::is_object) => Some(Section {
                        title: Some(key.as_str()),
                        rows: records(items),
                    }),
                    _ => None,
                })
                .collect();
            if sections.is_empty() {
                vec![Section {
                    title: None,
                    rows: vec![map],
                }]
            } else {
                sections
            }
        }
        _ => Vec::new(),
    }
}

fn records(items: &[Value]) -> Vec<&Map<String, Value>> {
    items.iter().filter_map(Value::as_object).collect()
}

/// Column names are every scalar field seen, in first-seen order.
fn build_rows(section: &Section<'_>) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers: Vec<String> = Vec::new();
    for row in &section.rows {
        for (key, v) in row.iter() {
            if is_scalar(v) && !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }
    let rows = section
        .rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| cell(row.get(h).filter(|v| is_scalar(v))))
                .collect()
        })
        .collect();
    (headers, rows)
}

fn is_scalar(value: &Value) -> bool {
    !(value.is_array() || value.is_object())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// -- Table output --

fn build_table(headers: &[String], rows: &[Vec<String>]) -> tabled::Table {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().cloned());
    for row in rows {
        builder.push_record(row.iter().cloned());
    }
    builder.build()
}

// -- CSV output --

fn print_csv(headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert!(matches!(OutputFormat::parse("json"), OutputFormat::Json));
        assert!(matches!(OutputFormat::parse("csv"), OutputFormat::Csv));
        assert!(matches!(OutputFormat::parse("md"), OutputFormat::Markdown));
        assert!(matches!(OutputFormat::parse("anything"), OutputFormat::Table));
    }

    #[test]
    fn test_cell_formatting() {
        assert_eq!(cell(None), "");
        assert_eq!(cell(Some(&Value::Null)), "");
        assert_eq!(cell(Some(&json!("solana"))), "solana");
        assert_eq!(cell(Some(&json!(3412.55))), "3412.55");
        assert_eq!(cell(Some(&json!(true))), "true");
    }

    #[test]
    fn test_array_is_one_section() {
        let value = json!([
            {"id": "ethereum", "display_name": "Ethereum"},
            {"id": "solana", "display_name": "Solana"}
        ]);
        let sections = build_sections(&value);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, None);

        let (headers, rows) = build_rows(&sections[0]);
        assert_eq!(headers, vec!["id", "display_name"]);
        assert_eq!(rows[1], vec!["solana", "Solana"]);
    }

    #[test]
    fn test_listing_uses_record_array() {
        let value = json!({
            "pools": [
                {"id": "0xpool", "volume_usd": 10.5, "tokens": [{"id": "0xa"}]},
                {"id": "0xother", "fee": 500}
            ],
            "page_info": {"page": 0, "total_pages": 3, "total_items": 25}
        });
        let sections = build_sections(&value);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, Some("pools"));

        let (headers, rows) = build_rows(&sections[0]);
        assert_eq!(headers, vec!["id", "volume_usd", "fee"]);
        assert_eq!(rows[0], vec!["0xpool", "10.5", ""]);
        assert_eq!(rows[1], vec!["0xother", "", "500"]);
    }

    #[test]
    fn test_search_results_give_one_section_each() {
        let value = json!({
            "tokens": [{"id": "sol", "symbol": "SOL"}],
            "pools": [],
            "dexes": [{"id": "raydium"}]
        });
        let titles: Vec<Option<&str>> = build_sections(&value).iter().map(|s| s.title).collect();
        assert_eq!(titles, vec![Some("tokens"), Some("pools"), Some("dexes")]);
    }

    #[test]
    fn test_record_with_scalars_is_single_row() {
        let value = json!({
            "id": "0xpool",
            "dex_id": "uniswap_v3",
            "tokens": [{"id": "0xa"}, {"id": "0xb"}],
            "last_price_usd": 1.01
        });
        let sections = build_sections(&value);
        assert_eq!(sections.len(), 1);
        let (headers, rows) = build_rows(&sections[0]);
        assert_eq!(headers, vec!["id", "dex_id", "last_price_usd"]);
        assert_eq!(rows, vec![vec!["0xpool", "uniswap_v3", "1.01"]]);
    }

    #[test]
    fn test_scalar_has_no_sections() {
        assert!(build_sections(&json!("ok")).is_empty());
    }

    #[test]
    fn test_build_table_renders_headers() {
        let rendered = build_table(
            &["id".to_string(), "name".to_string()],
            &[vec!["raydium".to_string(), "Raydium".to_string()]],
        )
        .to_string();
        assert!(rendered.contains("id"));
        assert!(rendered.contains("Raydium"));
    }
}
