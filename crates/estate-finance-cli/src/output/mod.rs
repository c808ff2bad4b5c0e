pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Split a result object into its scalar fields and its first array of
/// records (search hits), if any.
pub(crate) fn split_records(
    result: &serde_json::Map<String, Value>,
) -> (Vec<(&str, &Value)>, Option<&[Value]>) {
    let mut scalars = Vec::new();
    let mut records = None;

    for (key, val) in result {
        match val {
            Value::Array(items) if records.is_none() && items.iter().all(Value::is_object) => {
                records = Some(items.as_slice());
            }
            _ => scalars.push((key.as_str(), val)),
        }
    }

    (scalars, records)
}
