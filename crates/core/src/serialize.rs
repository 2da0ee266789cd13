// Writes a configuration back to the native format

use std::fmt::Write;

use crate::config::{ProjectConfig, SettingValue};

// column the upstream scaffold aligns the `=` of the path block to
const PATH_NAME_WIDTH: usize = 16;

/// Renders the configuration in the canonical scaffold layout: `require`
/// lines first, then the path block, then one section per optional toggle.
/// A toggle that is unset becomes the scaffold's commented hint instead of
/// an assignment, so a freshly generated file reads like the upstream one
/// and parsing it yields the configuration back unchanged.
pub fn to_native(config: &ProjectConfig) -> String {
    let mut out = String::new();

    for plugin in &config.plugins {
        let _ = writeln!(out, "require '{}'", plugin);
    }
    out.push_str("# Require any additional compass plugins here.\n\n");

    if let Some(http_path) = &config.http_path {
        out.push_str("# Set this to the root of your project when deployed:\n");
        push_path(&mut out, "http_path", http_path);
        out.push('\n');
    }

    let dirs = [
        ("css_dir", &config.css_dir),
        ("sass_dir", &config.sass_dir),
        ("images_dir", &config.images_dir),
        ("javascripts_dir", &config.javascripts_dir),
    ];
    for (name, value) in dirs {
        if let Some(value) = value {
            push_path(&mut out, name, value);
        }
    }
    out.push('\n');

    match config.output_style {
        Some(style) => {
            let _ = writeln!(out, "output_style = :{}", style.as_str());
        }
        None => out.push_str(
            "# You can select your preferred output style here (can be overridden via the command line):\n\
             # output_style = :expanded or :nested or :compact or :compressed\n",
        ),
    }
    out.push('\n');

    match config.relative_assets {
        Some(value) => {
            let _ = writeln!(out, "relative_assets = {}", value);
        }
        None => out.push_str(
            "# To enable relative paths to assets via compass helper functions. Uncomment:\n\
             # relative_assets = true\n",
        ),
    }
    out.push('\n');

    match config.line_comments {
        Some(value) => {
            let _ = writeln!(out, "line_comments = {}", value);
        }
        None => out.push_str(
            "# To disable debugging comments that display the original location of your selectors. Uncomment:\n\
             # line_comments = false\n",
        ),
    }
    out.push('\n');

    match config.preferred_syntax {
        Some(syntax) => {
            let _ = writeln!(out, "preferred_syntax = :{}", syntax.as_str());
        }
        None => out.push_str(
            "# If you prefer the indented syntax, you might want to regenerate this\n\
             # project again passing --syntax sass, or you can uncomment this:\n\
             # preferred_syntax = :sass\n",
        ),
    }

    if !config.extras.is_empty() {
        out.push('\n');
        for (name, value) in &config.extras {
            let _ = writeln!(out, "{} = {}", name, literal(value));
        }
    }

    out
}

fn push_path(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "{:<width$}= \"{}\"", name, value, width = PATH_NAME_WIDTH);
}

/// Renders a value the way it appears on the right-hand side of an
/// assignment.
pub(crate) fn literal(value: &SettingValue) -> String {
    match value {
        SettingValue::Bool(value) => value.to_string(),
        SettingValue::Str(value) => format!("\"{}\"", value),
        SettingValue::Symbol(name) => format!(":{}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputStyle, Syntax};
    use crate::parse::parse_str;

    #[test]
    fn test_scaffold_layout() {
        let rendered = to_native(&ProjectConfig::scaffold());

        assert!(rendered.contains("# Require any additional compass plugins here."));
        assert!(rendered.contains("http_path       = \"/\""));
        assert!(rendered.contains("css_dir         = \"stylesheets\""));
        assert!(rendered.contains("sass_dir        = \"sass\""));
        assert!(rendered.contains("images_dir      = \"images\""));
        assert!(rendered.contains("javascripts_dir = \"javascripts\""));
        // unset toggles stay commented hints
        assert!(rendered.contains("# output_style = :expanded or :nested or :compact or :compressed"));
        assert!(rendered.contains("# relative_assets = true"));
        assert!(rendered.contains("# line_comments = false"));
        assert!(rendered.contains("# preferred_syntax = :sass"));
    }

    #[test]
    fn test_set_toggles_become_assignments() {
        let config = ProjectConfig {
            output_style: Some(OutputStyle::Compressed),
            relative_assets: Some(true),
            line_comments: Some(false),
            preferred_syntax: Some(Syntax::Sass),
            ..ProjectConfig::scaffold()
        };
        let rendered = to_native(&config);

        assert!(rendered.contains("output_style = :compressed"));
        assert!(rendered.contains("relative_assets = true"));
        assert!(rendered.contains("line_comments = false"));
        assert!(rendered.contains("preferred_syntax = :sass"));
        assert!(!rendered.contains("# output_style"));
    }

    #[test]
    fn test_plugins_come_first() {
        let config = ProjectConfig {
            plugins: vec!["zurb-foundation".to_string()],
            ..ProjectConfig::scaffold()
        };
        let rendered = to_native(&config);

        assert!(rendered.starts_with("require 'zurb-foundation'\n"));
    }

    #[test]
    fn test_round_trip_scaffold() {
        let config = ProjectConfig::scaffold();

        assert_eq!(parse_str(&to_native(&config)).unwrap(), config);
    }

    #[test]
    fn test_round_trip_fully_set() {
        let config = ProjectConfig {
            http_path: Some("_site/".to_string()),
            css_dir: Some("_source/assets/stylesheets".to_string()),
            sass_dir: Some("_source/assets/sass".to_string()),
            images_dir: Some("_source/assets/images".to_string()),
            javascripts_dir: Some("_source/assets/javascript".to_string()),
            output_style: Some(OutputStyle::Expanded),
            relative_assets: Some(true),
            line_comments: Some(false),
            preferred_syntax: Some(Syntax::Sass),
            plugins: vec!["zurb-foundation".to_string(), "compass-rails".to_string()],
            ..ProjectConfig::default()
        };

        assert_eq!(parse_str(&to_native(&config)).unwrap(), config);
    }

    #[test]
    fn test_round_trip_extras() {
        let mut config = ProjectConfig::scaffold();
        config
            .extras
            .insert("cache_dir".to_string(), SettingValue::Str(".cache".to_string()));
        config
            .extras
            .insert("environment".to_string(), SettingValue::Symbol("production".to_string()));
        config
            .extras
            .insert("sourcemap".to_string(), SettingValue::Bool(true));

        assert_eq!(parse_str(&to_native(&config)).unwrap(), config);
    }

    #[test]
    fn test_round_trip_empty() {
        let config = ProjectConfig::default();

        assert_eq!(parse_str(&to_native(&config)).unwrap(), config);
    }
}
