use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::feature_rows;

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    if let Some(features) = feature_rows(value) {
        print_feature_table(features);
        print_envelope_footer(value);
        return;
    }

    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_flat_object(result);
                print_envelope_footer(value);
            } else {
                print_flat_object(value);
            }
        }
        _ => println!("{}", value),
    }
}

/// One row per scanned feature.
fn print_feature_table(features: &[Value]) {
    let mut builder = Builder::default();
    builder.push_record(["Feature", "PSI"]);
    for feature in features {
        let name = feature
            .get("feature")
            .and_then(Value::as_str)
            .unwrap_or("?");
        let psi = feature
            .get("psi")
            .and_then(Value::as_f64)
            .map(|p| format!("{:.6}", p))
            .unwrap_or_default();
        builder.push_record([name, &psi]);
    }
    let table = Table::from(builder);
    println!("{}", table);
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    } else {
        println!("{}", value);
    }
}

/// Print warnings and methodology carried on a computation envelope.
fn print_envelope_footer(value: &Value) {
    let Some(map) = value.as_object() else {
        return;
    };

    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = map.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
