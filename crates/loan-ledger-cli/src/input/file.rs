use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file into a typed struct.
///
/// `.yaml` and `.yml` files go through serde_yaml; anything else is JSON.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let parsed = if is_yaml(&canonical) {
        serde_yaml::from_str(&contents).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(&contents).map_err(|e| e.to_string())
    };
    parsed.map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e).into())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }
    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loan_ledger_core::amortization::{AmortizationInput, LoanSummaryInput};
    use rust_decimal_macros::dec;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("loan-ledger-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_reads_yaml_terms() {
        let path = write_temp(
            "terms.yaml",
            "amount: 200000\nannual_interest_rate: 0.045\nmonthly_payments: 180\n",
        );
        let terms: AmortizationInput = read_input(path.to_str().unwrap()).unwrap();
        assert_eq!(terms.amount, dec!(200000));
        assert_eq!(terms.annual_interest_rate, dec!(0.045));
        assert_eq!(terms.monthly_payments, 180);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_reads_json_summary_request() {
        let path = write_temp(
            "summary.json",
            r#"{"amount": 500000, "annual_interest_rate": 0.06, "monthly_payments": 360, "month": 12}"#,
        );
        let request: LoanSummaryInput = read_input(path.to_str().unwrap()).unwrap();
        assert_eq!(request.terms.amount, dec!(500000));
        assert_eq!(request.month, 12);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file() {
        let err = read_input::<AmortizationInput>("/nonexistent/loan.json").unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }
}
