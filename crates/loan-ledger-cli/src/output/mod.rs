pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` of a computation envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Split a result object into its scalar fields and its schedule rows.
pub(crate) fn split_schedule(result: &Map<String, Value>) -> (Vec<(&str, &Value)>, &[Value]) {
    let scalars = result
        .iter()
        .filter(|(key, _)| key.as_str() != "schedule")
        .map(|(key, val)| (key.as_str(), val))
        .collect();
    let rows = match result.get("schedule") {
        Some(Value::Array(rows)) => rows.as_slice(),
        _ => &[],
    };
    (scalars, rows)
}

/// Column order for schedule rows, with `month` leading.
pub(crate) fn row_headers(first: &Map<String, Value>) -> Vec<&str> {
    let mut headers: Vec<&str> = first.keys().map(String::as_str).collect();
    headers.sort_by_key(|h| *h != "month");
    headers
}

pub(crate) fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_schedule() {
        let result = json!({
            "monthly_payment": 100.0,
            "schedule": [{ "month": 1 }, { "month": 2 }]
        });
        let (scalars, rows) = split_schedule(result.as_object().unwrap());
        assert_eq!(scalars, vec![("monthly_payment", &json!(100.0))]);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_result_of_bare_value() {
        let bare = json!({ "principal_payment": 1.0 });
        assert_eq!(result_of(&bare), &bare);
        let wrapped = json!({ "result": bare.clone(), "warnings": [] });
        assert_eq!(result_of(&wrapped), &bare);
    }
}
