use std::path::Path;

use docforge_core::FieldValues;

use crate::CliError;

/// Parse a `name=value` pair. The value may be empty or contain `=`.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    if name.is_empty() {
        return Err(format!("field name missing in `{raw}`"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Merge values from an optional JSON object file with `--field` pairs.
///
/// Pairs given on the command line win over the file.
pub fn collect_values(
    values_file: Option<&Path>,
    fields: Vec<(String, String)>,
) -> Result<FieldValues, CliError> {
    let mut values = match values_file {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<FieldValues>(&content).map_err(|err| {
                CliError::InvalidArgument(format!(
                    "{} must be a JSON object of strings: {err}",
                    path.display()
                ))
            })?
        }
        None => FieldValues::new(),
    };
    values.extend(fields);
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals_only() {
        assert_eq!(
            parse_field("formula=a=b"),
            Ok(("formula".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_field("empty="), Ok(("empty".to_string(), String::new())));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=x").is_err());
    }

    #[test]
    fn command_line_overrides_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("values.json");
        std::fs::write(&path, r#"{"name": "file", "amount": "10"}"#).expect("write values");

        let values = collect_values(
            Some(&path),
            vec![("name".to_string(), "flag".to_string())],
        )
        .expect("collect");
        assert_eq!(values.get("name").map(String::as_str), Some("flag"));
        assert_eq!(values.get("amount").map(String::as_str), Some("10"));
    }

    #[test]
    fn rejects_non_string_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("values.json");
        std::fs::write(&path, r#"{"amount": 10}"#).expect("write values");

        let err = collect_values(Some(&path), Vec::new()).expect_err("non-string");
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }
}
