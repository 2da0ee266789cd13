mod config;
mod discover;
mod json;
mod parse;
mod serialize;
mod validate;

pub use config::{LoadError, OutputStyle, ProjectConfig, SettingValue, Syntax};
pub use config::{
    DEFAULT_CSS_DIR, DEFAULT_HTTP_PATH, DEFAULT_IMAGES_DIR, DEFAULT_JAVASCRIPTS_DIR,
    DEFAULT_SASS_DIR,
};
pub use discover::{discover, find_in, CONFIG_FILE_NAMES};
pub use json::JsonError;
pub use parse::ParseError;
pub use validate::{is_valid, validate, Finding, Severity};
