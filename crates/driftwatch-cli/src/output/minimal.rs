use serde_json::Value;

use super::feature_rows;

/// Print just the PSI values from the output.
///
/// A scan envelope prints one `feature psi` line per feature; a single
/// comparison prints the bare score.
pub fn print_minimal(value: &Value) {
    if let Some(features) = feature_rows(value) {
        for feature in features {
            let name = feature
                .get("feature")
                .and_then(Value::as_str)
                .unwrap_or("?");
            if let Some(psi) = feature.get("psi").and_then(Value::as_f64) {
                println!("{} {}", name, psi);
            }
        }
        return;
    }

    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        if let Some(psi) = map.get("psi") {
            if !psi.is_null() {
                println!("{}", format_minimal(psi));
                return;
            }
        }
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
