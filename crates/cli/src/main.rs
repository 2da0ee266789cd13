use clap::{Parser, Subcommand};
use kompass_core::{discover, find_in, is_valid, validate, ProjectConfig, Severity};
use kompass_logger::Logger;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Project directory
    #[arg(short, long, default_value = "./", global = true)]
    project: PathBuf,

    /// Verbosity level (-l = level 1, -ll = level 2, etc.)
    #[arg(short = 'l', action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a scaffold configuration into the project directory
    Init {
        /// Configuration format to write
        #[arg(short, long, default_value = "rb")]
        format: Format,
    },
    /// Parse and validate the project configuration
    Check,
    /// Print the configuration with the compiler defaults filled in
    Show {
        /// Output format
        #[arg(short, long, default_value = "rb")]
        format: Format,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, clap::ValueEnum, Debug)]
enum Format {
    Rb,
    Json,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    Logger::set_level(args.verbosity);

    let project = std::fs::canonicalize(&args.project)?;

    match args.command {
        Command::Init { format } => init(&project, format),
        Command::Check => check(&project),
        Command::Show { format } => show(&project, format),
    }
}

fn init(project: &Path, format: Format) -> std::io::Result<()> {
    if let Some(existing) = find_in(project) {
        Logger::error(&format!(
            "A configuration already exists at: {}",
            existing.display()
        ));
        std::process::exit(1);
    }

    let config = ProjectConfig::scaffold();
    let (file_name, content) = match format {
        Format::Rb => ("config.rb", config.to_native()),
        Format::Json => ("kompass.json", render_json(&config)),
    };

    let path = project.join(file_name);
    fs::write(&path, content)?;
    Logger::info(&format!("Wrote configuration to: {}", path.display()));

    Ok(())
}

fn check(project: &Path) -> std::io::Result<()> {
    let (path, config) = load(project);

    let findings = validate(&config);
    for finding in &findings {
        match finding.severity {
            Severity::Error => Logger::error(&finding.to_string()),
            Severity::Warning => Logger::warn(&finding.to_string()),
        }
    }

    if !is_valid(&findings) {
        std::process::exit(1);
    }

    Logger::info(&format!("Configuration OK: {}", path.display()));
    Ok(())
}

fn show(project: &Path, format: Format) -> std::io::Result<()> {
    let (path, config) = load(project);
    Logger::debug(&format!("Showing configuration from: {}", path.display()), 1);

    let resolved = config.with_defaults();
    match format {
        Format::Rb => print!("{}", resolved.to_native()),
        Format::Json => print!("{}", render_json(&resolved)),
    }

    Ok(())
}

/// Discovers and reads the project configuration, or exits: code 2 when no
/// configuration file exists, code 1 when one exists but cannot be read.
fn load(project: &Path) -> (PathBuf, ProjectConfig) {
    let Some(path) = discover(project) else {
        Logger::error(&format!("No configuration found in: {}", project.display()));
        std::process::exit(2);
    };

    match ProjectConfig::read(&path) {
        Ok(config) => (path, config),
        Err(e) => {
            Logger::error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn render_json(config: &ProjectConfig) -> String {
    match config.to_json_pretty() {
        Ok(rendered) => rendered + "\n",
        Err(e) => {
            Logger::error(&format!("Failed to render configuration: {}", e));
            std::process::exit(1);
        }
    }
}
