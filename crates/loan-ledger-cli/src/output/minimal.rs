use serde_json::Value;

use super::{format_value, result_of};

/// Headline figure for each command, most specific first.
const PRIORITY_KEYS: [&str; 4] = [
    "monthly_payment",
    "total_principal_payment",
    "total_interest_payment",
    "principal_payment",
];

/// Print just the headline number of the result.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result = result_of(value);
    let Value::Object(map) = result else {
        return format_value(result);
    };

    for key in PRIORITY_KEYS {
        if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
            return format_value(val);
        }
    }

    map.iter()
        .find(|(key, _)| key.as_str() != "schedule")
        .map(|(key, val)| format!("{}: {}", key, format_value(val)))
        .unwrap_or_default()
}
