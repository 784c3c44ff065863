use serde_json::Value;
use std::io::{self, Write};

use super::{format_value, result_of, row_headers, split_schedule};

/// Write output as CSV to stdout.
///
/// A result carrying a schedule becomes one record per month; any other
/// result becomes `field,value` pairs.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: Write>(writer: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match result_of(value) {
        Value::Object(result) => {
            let (scalars, rows) = split_schedule(result);
            if rows.is_empty() {
                wtr.write_record(["field", "value"])?;
                for (key, val) in scalars {
                    wtr.write_record([key.to_string(), csv_value(val)])?;
                }
            } else {
                write_rows(&mut wtr, rows)?;
            }
        }
        Value::Array(rows) => write_rows(&mut wtr, rows)?,
        other => wtr.write_record([csv_value(other)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = rows.first() else {
        return Ok(());
    };

    let headers = row_headers(first);
    wtr.write_record(&headers)?;
    for row in rows.iter().filter_map(Value::as_object) {
        wtr.write_record(
            headers
                .iter()
                .map(|h| row.get(*h).map(csv_value).unwrap_or_default()),
        )?;
    }
    Ok(())
}

fn csv_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => format_value(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_schedule_rows() {
        let value = json!({
            "result": {
                "monthly_payment": 100.0,
                "schedule": [
                    { "month": 1, "interest_payment": 0.0, "principal_payment": 100.0, "remaining_balance": 100.0 },
                    { "month": 2, "interest_payment": 0.0, "principal_payment": 100.0, "remaining_balance": 0.0 }
                ]
            }
        });
        assert_eq!(
            render(&value),
            "month,interest_payment,principal_payment,remaining_balance\n\
             1,0.0,100.0,100.0\n\
             2,0.0,100.0,0.0\n"
        );
    }

    #[test]
    fn test_summary_fields() {
        let value = json!({ "result": { "principal_payment": 2982.84 } });
        assert_eq!(render(&value), "field,value\nprincipal_payment,2982.84\n");
    }
}
