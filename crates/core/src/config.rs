// Handles the project configuration model

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::json::{self, JsonError};
use crate::parse::{self, ParseError};
use crate::serialize;

pub const DEFAULT_HTTP_PATH: &str = "/";
pub const DEFAULT_CSS_DIR: &str = "stylesheets";
pub const DEFAULT_SASS_DIR: &str = "sass";
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_JAVASCRIPTS_DIR: &str = "javascripts";

/// A literal as it appears on the right-hand side of an assignment.
///
/// The native format admits three shapes: quoted strings, `:symbol` names
/// and bare booleans. Unrecognized options keep their literal shape so they
/// serialize back exactly as written. In the JSON form symbols have no
/// representation and read back as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Str(String),
    Symbol(String),
}

/// Formatting density of the compiled CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputStyle {
    Expanded,
    #[default]
    Nested,
    Compact,
    Compressed,
}

impl OutputStyle {
    pub const NAMES: [&'static str; 4] = ["expanded", "nested", "compact", "compressed"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "expanded" => Some(Self::Expanded),
            "nested" => Some(Self::Nested),
            "compact" => Some(Self::Compact),
            "compressed" => Some(Self::Compressed),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Nested => "nested",
            Self::Compact => "compact",
            Self::Compressed => "compressed",
        }
    }
}

/// Input syntax preference of the stylesheet sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Syntax {
    #[default]
    Scss,
    Sass,
}

impl Syntax {
    pub const NAMES: [&'static str; 2] = ["scss", "sass"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "scss" => Some(Self::Scss),
            "sass" => Some(Self::Sass),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scss => "scss",
            Self::Sass => "sass",
        }
    }
}

/// The flat option set a project configuration file assigns.
///
/// Unset is distinct from set-to-default: serializing a configuration only
/// emits the assignments it actually holds, so a file round-trips without
/// gaining lines the author never wrote. Defaults are applied separately
/// through [`ProjectConfig::with_defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Root path for deployed assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_path: Option<String>,
    /// Output directory for compiled CSS.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_dir: Option<String>,
    /// Source directory for Sass files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sass_dir: Option<String>,
    /// Directory for image assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images_dir: Option<String>,
    /// Directory for JavaScript assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascripts_dir: Option<String>,
    /// CSS formatting mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_style: Option<OutputStyle>,
    /// Whether asset helpers emit relative paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_assets: Option<bool>,
    /// Whether the compiler emits source-location comments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_comments: Option<bool>,
    /// Input syntax preference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_syntax: Option<Syntax>,
    /// Plugin names from `require '...'` lines, in file order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    /// Assignments to option names outside the known table, kept verbatim.
    #[serde(flatten)]
    pub extras: BTreeMap<String, SettingValue>,
}

/// Errors produced while reading a configuration file from disk.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error("{}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: JsonError,
    },
}

impl ProjectConfig {
    /// The configuration a fresh project starts from: the compiler's
    /// default directories spelled out, everything optional left unset.
    pub fn scaffold() -> Self {
        Self {
            http_path: Some(DEFAULT_HTTP_PATH.to_string()),
            css_dir: Some(DEFAULT_CSS_DIR.to_string()),
            sass_dir: Some(DEFAULT_SASS_DIR.to_string()),
            images_dir: Some(DEFAULT_IMAGES_DIR.to_string()),
            javascripts_dir: Some(DEFAULT_JAVASCRIPTS_DIR.to_string()),
            ..Self::default()
        }
    }

    /// Returns a copy with the consuming compiler's defaults filled into
    /// every unset option.
    pub fn with_defaults(&self) -> Self {
        let mut config = self.clone();
        config.http_path.get_or_insert_with(|| DEFAULT_HTTP_PATH.to_string());
        config.css_dir.get_or_insert_with(|| DEFAULT_CSS_DIR.to_string());
        config.sass_dir.get_or_insert_with(|| DEFAULT_SASS_DIR.to_string());
        config.images_dir.get_or_insert_with(|| DEFAULT_IMAGES_DIR.to_string());
        config
            .javascripts_dir
            .get_or_insert_with(|| DEFAULT_JAVASCRIPTS_DIR.to_string());
        config.output_style.get_or_insert(OutputStyle::Nested);
        config.relative_assets.get_or_insert(false);
        config.line_comments.get_or_insert(true);
        config.preferred_syntax.get_or_insert(Syntax::Scss);
        config
    }

    /// Reads a configuration file, picking the format by file extension:
    /// `.json` is read as JSON (comments allowed), everything else as the
    /// native flat-assignment format.
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().map_or(false, |ext| ext == "json") {
            Self::from_json(&content).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Self::from_native(&content).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Parses the native flat-assignment format.
    pub fn from_native(source: &str) -> Result<Self, ParseError> {
        parse::parse_str(source)
    }

    /// Parses the JSON form. Comments and trailing commas are accepted.
    pub fn from_json(source: &str) -> Result<Self, JsonError> {
        json::from_str(source)
    }

    /// Renders the native format in the canonical scaffold layout.
    pub fn to_native(&self) -> String {
        serialize::to_native(self)
    }

    /// Renders the JSON form, pretty-printed.
    pub fn to_json_pretty(&self) -> Result<String, JsonError> {
        json::to_string_pretty(self)
    }
}
