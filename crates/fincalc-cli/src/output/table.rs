use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables: one for the projection metrics, one for the
/// period breakdown, plus warnings and methodology from the envelope.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result);
                print_envelope_footer(map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => print_rows_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value) {
    // Projection results carry primary/secondary metrics and a breakdown;
    // inverse-helper results are flat field/value objects.
    if result.get("primary").is_some() {
        print_metrics(result);
        if let Some(rows) = breakdown_rows(result) {
            println!();
            print_rows_table(rows);
        }
    } else {
        print_flat_object(result);
    }
}

fn print_metrics(result: &Value) {
    let mut builder = Builder::default();
    builder.push_record(["Metric", "Amount"]);

    if let Some(primary) = result.get("primary") {
        builder.push_record([metric_label(primary), metric_amount(primary)]);
    }
    if let Some(Value::Array(secondary)) = result.get("secondary") {
        for m in secondary {
            builder.push_record([metric_label(m), metric_amount(m)]);
        }
    }

    let table = Table::from(builder);
    println!("{}", table);
}

fn metric_label(metric: &Value) -> String {
    metric
        .get("label")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn metric_amount(metric: &Value) -> String {
    metric
        .get("formatted")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format_value(metric.get("value").unwrap_or(&Value::Null)))
}

fn breakdown_rows(result: &Value) -> Option<&Vec<Value>> {
    match result.get("breakdown")?.get("rows")? {
        Value::Array(rows) if !rows.is_empty() => Some(rows),
        _ => None,
    }
}

fn print_envelope_footer(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
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
    }
}

fn print_rows_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(format_value)
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
