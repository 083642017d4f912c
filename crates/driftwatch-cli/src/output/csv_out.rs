use serde_json::Value;
use std::io;

use super::feature_rows;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Some(features) = feature_rows(value) {
        let _ = wtr.write_record(["feature", "psi"]);
        for feature in features {
            let name = feature
                .get("feature")
                .and_then(Value::as_str)
                .unwrap_or_default();
            let psi = feature
                .get("psi")
                .and_then(Value::as_f64)
                .map(|p| p.to_string())
                .unwrap_or_default();
            let _ = wtr.write_record([name, &psi]);
        }
    } else {
        // generic two-column rendering for flat outputs
        let flat = value
            .as_object()
            .and_then(|m| m.get("result"))
            .unwrap_or(value);
        let _ = wtr.write_record(["field", "value"]);
        if let Value::Object(map) = flat {
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
            }
        } else {
            let _ = wtr.write_record(["value", &format_csv_value(flat)]);
        }
    }

    let _ = wtr.flush();
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
