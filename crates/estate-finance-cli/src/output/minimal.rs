use serde_json::Value;

/// Key answer fields, most important first.
const PRIORITY_KEYS: [&str; 4] = ["monthly_payment", "distance_km", "results", "loan_amount"];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", render_minimal(value));
}

/// Look for well-known result fields in order of priority, then fall back to
/// the first field in the result object.
fn render_minimal(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            match map.get(*key) {
                Some(Value::Array(items)) => return render_nearest(items),
                Some(val) if !val.is_null() => return format_minimal(val),
                _ => {}
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result_obj)
}

/// Search results collapse to the nearest hit, e.g. `Ridge Hospital (1.42 km)`.
fn render_nearest(items: &[Value]) -> String {
    match items.first() {
        Some(first) => {
            let name = first.get("name").map(format_minimal).unwrap_or_default();
            let km = first.get("distance_km").map(format_minimal).unwrap_or_default();
            format!("{name} ({km} km)")
        }
        None => "none".to_string(),
    }
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
