// JSON form of the project configuration

use jsonc_parser::ParseOptions;

use crate::config::ProjectConfig;

/// Errors produced while reading or writing the JSON form.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    #[error("invalid JSON: {0}")]
    Syntax(String),
    #[error("configuration file is empty")]
    Empty,
    #[error("invalid configuration: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Parses the JSON form. Comments and trailing commas are accepted, the
/// same tolerance the tooling around `tsconfig.json` extends.
pub fn from_str(source: &str) -> Result<ProjectConfig, JsonError> {
    let value = jsonc_parser::parse_to_serde_value(source, &ParseOptions::default())
        .map_err(|e| JsonError::Syntax(e.to_string()))?
        .ok_or(JsonError::Empty)?;

    Ok(serde_json::from_value(value)?)
}

pub fn to_string_pretty(config: &ProjectConfig) -> Result<String, JsonError> {
    Ok(serde_json::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputStyle, SettingValue, Syntax};

    #[test]
    fn test_from_str() {
        let config = from_str(
            r#"
            {
                "http_path": "/",
                "css_dir": "stylesheets",
                "sass_dir": "sass",
                "output_style": "compressed",
                "relative_assets": true,
                "preferred_syntax": "sass",
                "plugins": ["zurb-foundation"]
            }
            "#,
        )
        .unwrap();

        assert_eq!(config.http_path.as_deref(), Some("/"));
        assert_eq!(config.css_dir.as_deref(), Some("stylesheets"));
        assert_eq!(config.output_style, Some(OutputStyle::Compressed));
        assert_eq!(config.relative_assets, Some(true));
        assert_eq!(config.preferred_syntax, Some(Syntax::Sass));
        assert_eq!(config.plugins, vec!["zurb-foundation".to_string()]);
        assert_eq!(config.images_dir, None);
    }

    #[test]
    fn test_from_str_accepts_comments() {
        let config = from_str(
            r#"
            {
                // compiled output lands here
                "css_dir": "out/css",
                /* sources */
                "sass_dir": "scss",
            }
            "#,
        )
        .unwrap();

        assert_eq!(config.css_dir.as_deref(), Some("out/css"));
        assert_eq!(config.sass_dir.as_deref(), Some("scss"));
    }

    #[test]
    fn test_from_str_collects_unknown_keys() {
        let config = from_str(r#"{"css_dir": "css", "cache_dir": ".cache", "sourcemap": true}"#)
            .unwrap();

        assert_eq!(
            config.extras.get("cache_dir"),
            Some(&SettingValue::Str(".cache".to_string()))
        );
        assert_eq!(config.extras.get("sourcemap"), Some(&SettingValue::Bool(true)));
    }

    #[test]
    fn test_from_str_rejects_invalid_enum() {
        assert!(from_str(r#"{"output_style": "ugly"}"#).is_err());
    }

    #[test]
    fn test_from_str_rejects_broken_json() {
        assert!(matches!(from_str(r#"{"]ht["te)}"#), Err(JsonError::Syntax(_))));
    }

    #[test]
    fn test_from_str_empty_input() {
        assert!(matches!(from_str(""), Err(JsonError::Empty)));
    }

    #[test]
    fn test_round_trip() {
        let mut config = ProjectConfig::scaffold();
        config.output_style = Some(OutputStyle::Expanded);
        config.line_comments = Some(false);
        config.plugins.push("compass-rails".to_string());
        config
            .extras
            .insert("cache_dir".to_string(), SettingValue::Str(".cache".to_string()));

        let rendered = to_string_pretty(&config).unwrap();

        assert_eq!(from_str(&rendered).unwrap(), config);
    }

    #[test]
    fn test_unset_options_are_not_serialized() {
        let rendered = to_string_pretty(&ProjectConfig::scaffold()).unwrap();

        assert!(rendered.contains("\"css_dir\""));
        assert!(!rendered.contains("output_style"));
        assert!(!rendered.contains("plugins"));
    }
}
