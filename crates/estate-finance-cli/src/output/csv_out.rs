use serde_json::Value;
use std::io;

use super::split_records;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        tracing::error!(error = %e, "CSV output failed");
    }
}

/// Search hits become one row per hit; scalar results become field/value
/// pairs.
fn write_csv<W: io::Write>(writer: W, value: &Value) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => match split_records(result) {
                (_, Some(records)) => write_records(&mut wtr, records)?,
                (scalars, None) => write_pairs(&mut wtr, scalars.into_iter())?,
            },
            _ => write_pairs(&mut wtr, map.iter().map(|(k, v)| (k.as_str(), v)))?,
        },
        Value::Array(arr) => write_records(&mut wtr, arr)?,
        _ => wtr.write_record([format_csv_value(value)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_pairs<'a, W: io::Write>(
    wtr: &mut csv::Writer<W>,
    fields: impl Iterator<Item = (&'a str, &'a Value)>,
) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in fields {
        wtr.write_record([key.to_string(), format_csv_value(val)])?;
    }
    Ok(())
}

fn write_records<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) -> csv::Result<()> {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            wtr.write_record([format_csv_value(item)])?;
        }
        return Ok(());
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    wtr.write_record(&headers)?;

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(format_csv_value).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut buf = Vec::new();
        write_csv(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_breakdown_as_pairs() {
        let v = json!({"result": {"loan_amount": "400000", "monthly_payment": "7207.41"}});
        assert_eq!(
            render(&v),
            "field,value\nloan_amount,400000\nmonthly_payment,7207.41\n"
        );
    }

    #[test]
    fn test_hits_as_rows() {
        let v = json!({"result": {"total_found": 1, "results": [
            {"distance_km": 0.11, "name": "Corner Pharmacy"}
        ]}});
        assert_eq!(render(&v), "distance_km,name\n0.11,Corner Pharmacy\n");
    }
}
