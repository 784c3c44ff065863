use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{format_value, row_headers, split_schedule};

/// Print the result fields, then the schedule as one row per month.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => {
                print_result(result);
                print_notes(map);
            }
            _ => println!("{}", field_table(map.iter().map(|(k, v)| (k.as_str(), v)))),
        },
        Value::Array(rows) => print_rows(rows),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Map<String, Value>) {
    let (scalars, rows) = split_schedule(result);
    println!("{}", field_table(scalars));
    if !rows.is_empty() {
        println!();
        print_rows(rows);
    }
}

fn field_table<'a>(fields: impl IntoIterator<Item = (&'a str, &'a Value)>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.to_string(), format_value(val)]);
    }
    builder.build()
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        println!("(empty)");
        return;
    };

    let headers = row_headers(first);
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.replace('_', " ")));
    for row in rows.iter().filter_map(Value::as_object) {
        builder.push_record(
            headers
                .iter()
                .map(|h| row.get(*h).map(format_value).unwrap_or_default()),
        );
    }
    println!("{}", builder.build());
}

fn print_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
