// Structural validation of a parsed configuration

use std::fmt;

use crate::config::ProjectConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single structural problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub option: String,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn error(option: &str, message: &str) -> Self {
        Self {
            option: option.to_string(),
            severity: Severity::Error,
            message: message.to_string(),
        }
    }

    fn warning(option: &str, message: &str) -> Self {
        Self {
            option: option.to_string(),
            severity: Severity::Warning,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.option, self.message)
    }
}

/// Checks the structural properties a configuration must hold: every
/// required path option present and non-empty, and nothing unknown passed
/// off silently. Values of the mode options cannot be invalid here; both
/// readers reject them before a configuration exists. Whether the
/// configured directories exist on disk is the consuming compiler's
/// business, not checked here.
pub fn validate(config: &ProjectConfig) -> Vec<Finding> {
    let mut findings = Vec::new();

    let required = [
        ("http_path", &config.http_path),
        ("css_dir", &config.css_dir),
        ("sass_dir", &config.sass_dir),
        ("images_dir", &config.images_dir),
        ("javascripts_dir", &config.javascripts_dir),
    ];
    for (option, value) in required {
        match value {
            None => findings.push(Finding::error(option, "required option is not set")),
            Some(path) if path.trim().is_empty() => {
                findings.push(Finding::error(option, "must be a non-empty path"))
            }
            Some(_) => {}
        }
    }

    for option in config.extras.keys() {
        findings.push(Finding::warning(
            option,
            "not an option the compiler reads; kept as written",
        ));
    }

    findings
}

/// True when no finding is an error. Warnings alone leave a configuration
/// usable.
pub fn is_valid(findings: &[Finding]) -> bool {
    !findings.iter().any(|f| f.severity == Severity::Error)
}
