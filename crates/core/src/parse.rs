// Parser for the native flat-assignment configuration format

use crate::config::{OutputStyle, ProjectConfig, SettingValue, Syntax};
use crate::serialize::literal;

/// Errors produced while reading the native configuration format.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: expected `option = value` or `require '...'`, found `{text}`")]
    UnrecognizedLine { line: usize, text: String },
    #[error("line {line}: could not read the value `{text}`")]
    BadLiteral { line: usize, text: String },
    #[error("line {line}: `{option}` must be {expected}, found {found}")]
    InvalidValue {
        line: usize,
        option: String,
        expected: String,
        found: String,
    },
}

/// Parses the native format: blank lines and `#` comments are skipped,
/// `require '...'` lines collect plugins, everything else must be a flat
/// `option = value` assignment. A known option assigned twice keeps the
/// last value, matching top-to-bottom evaluation of the file.
pub fn parse_str(source: &str) -> Result<ProjectConfig, ParseError> {
    let mut config = ProjectConfig::default();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();

        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        if let Some(rest) = text.strip_prefix("require") {
            if rest.starts_with(|c: char| c.is_whitespace() || c == '"' || c == '\'') {
                match parse_literal(rest.trim_start(), line)? {
                    SettingValue::Str(name) => config.plugins.push(name),
                    _ => {
                        return Err(ParseError::BadLiteral {
                            line,
                            text: rest.trim().to_string(),
                        })
                    }
                }
                continue;
            }
        }

        let Some((name, value_text)) = text.split_once('=') else {
            return Err(ParseError::UnrecognizedLine {
                line,
                text: text.to_string(),
            });
        };
        let name = name.trim();
        if !is_option_name(name) {
            return Err(ParseError::UnrecognizedLine {
                line,
                text: text.to_string(),
            });
        }

        let value = parse_literal(value_text.trim(), line)?;
        apply(&mut config, name, value, line)?;
    }

    Ok(config)
}

fn is_option_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// True when the rest of a line after a value is blank or a comment.
fn is_trailing(tail: &str) -> bool {
    let tail = tail.trim_start();
    tail.is_empty() || tail.starts_with('#')
}

fn parse_literal(text: &str, line: usize) -> Result<SettingValue, ParseError> {
    let bad_literal = || ParseError::BadLiteral {
        line,
        text: text.to_string(),
    };

    for quote in ['"', '\''] {
        if let Some(rest) = text.strip_prefix(quote) {
            let (value, tail) = rest.split_once(quote).ok_or_else(bad_literal)?;
            if !is_trailing(tail) {
                return Err(bad_literal());
            }
            return Ok(SettingValue::Str(value.to_string()));
        }
    }

    if let Some(rest) = text.strip_prefix(':') {
        let name: String = rest
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if name.is_empty() || !is_trailing(&rest[name.len()..]) {
            return Err(bad_literal());
        }
        return Ok(SettingValue::Symbol(name));
    }

    let mut parts = text.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or("");
    if !is_trailing(parts.next().unwrap_or("")) {
        return Err(bad_literal());
    }
    match word {
        "true" => Ok(SettingValue::Bool(true)),
        "false" => Ok(SettingValue::Bool(false)),
        _ => Err(bad_literal()),
    }
}

fn apply(
    config: &mut ProjectConfig,
    name: &str,
    value: SettingValue,
    line: usize,
) -> Result<(), ParseError> {
    match name {
        "http_path" => config.http_path = Some(expect_string(name, value, line)?),
        "css_dir" => config.css_dir = Some(expect_string(name, value, line)?),
        "sass_dir" => config.sass_dir = Some(expect_string(name, value, line)?),
        "images_dir" => config.images_dir = Some(expect_string(name, value, line)?),
        "javascripts_dir" => config.javascripts_dir = Some(expect_string(name, value, line)?),
        "output_style" => {
            config.output_style = Some(expect_choice(
                name,
                value,
                line,
                OutputStyle::from_name,
                &OutputStyle::NAMES,
            )?)
        }
        "relative_assets" => config.relative_assets = Some(expect_bool(name, value, line)?),
        "line_comments" => config.line_comments = Some(expect_bool(name, value, line)?),
        "preferred_syntax" => {
            config.preferred_syntax = Some(expect_choice(
                name,
                value,
                line,
                Syntax::from_name,
                &Syntax::NAMES,
            )?)
        }
        _ => {
            config.extras.insert(name.to_string(), value);
        }
    }
    Ok(())
}

fn expect_string(option: &str, value: SettingValue, line: usize) -> Result<String, ParseError> {
    match value {
        SettingValue::Str(s) => Ok(s),
        other => Err(ParseError::InvalidValue {
            line,
            option: option.to_string(),
            expected: "a quoted path".to_string(),
            found: literal(&other),
        }),
    }
}

fn expect_bool(option: &str, value: SettingValue, line: usize) -> Result<bool, ParseError> {
    match value {
        SettingValue::Bool(b) => Ok(b),
        other => Err(ParseError::InvalidValue {
            line,
            option: option.to_string(),
            expected: "true or false".to_string(),
            found: literal(&other),
        }),
    }
}

fn expect_choice<T>(
    option: &str,
    value: SettingValue,
    line: usize,
    from_name: impl Fn(&str) -> Option<T>,
    names: &[&str],
) -> Result<T, ParseError> {
    let invalid = |found: String| ParseError::InvalidValue {
        line,
        option: option.to_string(),
        expected: format!("one of {}", names.join(", ")),
        found,
    };

    match value {
        SettingValue::Symbol(name) | SettingValue::Str(name) => {
            from_name(&name).ok_or_else(|| invalid(name))
        }
        other => Err(invalid(literal(&other))),
    }
}
