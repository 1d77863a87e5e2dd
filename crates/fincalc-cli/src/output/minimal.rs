use serde_json::Value;

/// Print just the key answer value from the output: the primary metric for
/// projection results, or the single field of an inverse-helper result.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Projection results: the primary metric is the headline figure
    if let Some(primary) = result_obj.get("primary") {
        if let Some(v) = primary.get("value") {
            println!("{}", format_minimal(v));
            return;
        }
    }

    if let Value::Object(map) = result_obj {
        // Inverse helpers: a single field holds the answer
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
