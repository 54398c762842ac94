use serde::Serialize;
use serde_json::{json, Value};
use std::fmt::Display;

use crate::cli::OutputFormat;
use crate::models::field;

/// Output a success message in the appropriate format
pub fn output_success(output_format: &OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(Value::Object(extra)), Some(body)) = (data, response.as_object_mut()) {
                body.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(output_format: &OutputFormat, message: &str, error_code: Option<&str>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": false,
                "error": message
            });

            if let Some(code) = error_code {
                response["error_code"] = json!(code);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

/// Serialize in JSON mode, `Display` in text mode
pub fn output_view<T: Serialize + Display>(output_format: &OutputFormat, view: &T) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
        OutputFormat::Text => println!("{}", view),
    }
    Ok(())
}

/// Parse repeated `--set field=value` flags
pub fn parse_assignments(raw: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    raw.iter()
        .map(|item| {
            let (name, value) = field::parse_assignment(item)?;
            Ok((name.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_keep_order_and_reject_malformed_input() {
        let parsed = parse_assignments(&["name=Rust".into(), "proficiency = 80".into()]).unwrap();
        assert_eq!(parsed[0], ("name".to_string(), "Rust".to_string()));
        assert_eq!(parsed[1].0, "proficiency");

        assert!(parse_assignments(&["no-equals-sign".into()]).is_err());
    }
}
