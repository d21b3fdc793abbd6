//! Loading templates and data for CLI commands.

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, IntoDiagnostic, Result};
use substrat::Value;

use crate::output::DataDiagnostic;

/// Read the template named on the command line.
///
/// With `inline`, `source` is the template text itself.
pub fn read_template(source: &str, inline: bool) -> Result<String> {
    if inline {
        return Ok(source.to_string());
    }
    read_to_string(source)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read template {}: {}", source, e))
}

/// Load the data context from an optional JSON file, then apply parameters.
///
/// Without a file the data context is an empty map.
pub fn load_data(path: Option<&Path>, params: &[(String, String)]) -> Result<Value> {
    let data = match path {
        Some(path) => {
            let content = read_to_string(path)
                .into_diagnostic()
                .map_err(|e| miette!("Failed to read data file {}: {}", path.display(), e))?;
            serde_json::from_str::<Value>(&content)
                .map_err(|e| DataDiagnostic::from_json_error(path, &content, &e))?
        }
        None => Value::Map(Default::default()),
    };
    apply_params(data, params)
}

/// Set top-level keys from `name=value` parameters.
///
/// Values that parse as integers become numbers; everything else is a string.
pub fn apply_params(data: Value, params: &[(String, String)]) -> Result<Value> {
    if params.is_empty() {
        return Ok(data);
    }
    let mut map = match data {
        Value::Map(map) => map,
        Value::Null => Default::default(),
        _ => return Err(miette!("--param requires the data file to contain a JSON object")),
    };
    for (key, raw) in params {
        let value = match raw.parse::<i64>() {
            Ok(n) => Value::from(n),
            Err(_) => Value::from(raw.as_str()),
        };
        map.insert(key.clone(), value);
    }
    Ok(Value::Map(map))
}

/// Parse a key=value parameter string.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{}': expected name=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_key_val_splits_on_first_equals() {
        assert_eq!(
            parse_key_val("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
        assert!(parse_key_val("novalue").is_err());
    }

    #[test]
    fn inline_template_is_returned_verbatim() {
        assert_eq!(read_template("{{ a }}", true).unwrap(), "{{ a }}");
    }

    #[test]
    fn template_is_read_from_file() {
        let file = write_temp("Hello {{ name }}");
        let path = file.path().to_str().unwrap();
        assert_eq!(read_template(path, false).unwrap(), "Hello {{ name }}");
    }

    #[test]
    fn missing_template_file_is_an_error() {
        assert!(read_template("/nonexistent/template.txt", false).is_err());
    }

    #[test]
    fn no_data_file_gives_empty_map() {
        let data = load_data(None, &[]).unwrap();
        assert!(data.as_map().unwrap().is_empty());
    }

    #[test]
    fn data_file_is_parsed_as_json() {
        let file = write_temp(r#"{ "user": { "name": "Ada" } }"#);
        let data = load_data(Some(file.path()), &[]).unwrap();
        assert_eq!(
            data.lookup("user.name").and_then(Value::as_string),
            Some("Ada")
        );
    }

    #[test]
    fn invalid_json_is_a_diagnostic() {
        let file = write_temp("{ \"a\": }");
        let err = load_data(Some(file.path()), &[]).unwrap_err();
        assert!(err.to_string().starts_with("invalid data:"));
    }

    #[test]
    fn params_override_file_values() {
        let file = write_temp(r#"{ "a": "file", "b": "kept" }"#);
        let params = vec![
            ("a".to_string(), "cli".to_string()),
            ("n".to_string(), "7".to_string()),
        ];
        let data = load_data(Some(file.path()), &params).unwrap();
        assert_eq!(data.lookup("a").and_then(Value::as_string), Some("cli"));
        assert_eq!(data.lookup("b").and_then(Value::as_string), Some("kept"));
        assert_eq!(data.lookup("n").and_then(Value::as_number), Some(7));
    }

    #[test]
    fn params_need_an_object() {
        let result = apply_params(Value::from(vec![1]), &[("a".to_string(), "1".to_string())]);
        assert!(result.is_err());
    }
}
