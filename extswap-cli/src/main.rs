use anyhow::{Context, Result};
use clap::Parser;
use extswap_core::{
    Config, Conversion, Direction, ExtswapError, OutputFormatter, Suffix, VersionResult,
};
use std::path::Path;
use std::process;

mod cli;
mod convert;
mod logging;

use cli::{Cli, Commands, OutputFormat};

fn main() {
    logging::init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(exit_code(&e));
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let dir = match cli.directory {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    let conversion = match cli.command {
        Some(Commands::ToGs) => Direction::ToGs.conversion(),
        Some(Commands::ToJs) => Direction::ToJs.conversion(),
        Some(Commands::Convert { source, target }) => Conversion::new(source, target)?,
        Some(Commands::Init { source, target }) => return handle_init(&dir, source, target),
        Some(Commands::Version) => return handle_version(cli.output),
        None => default_conversion(&dir)?,
    };

    convert::handle_convert(&dir, &conversion, cli.output)
}

fn default_conversion(dir: &Path) -> Result<Conversion> {
    let config = Config::load(dir).context("Failed to load config")?;
    Ok(config.default_conversion()?)
}

fn handle_init(dir: &Path, source: Option<Suffix>, target: Option<Suffix>) -> Result<()> {
    let conversion = match (source, target) {
        (Some(source), Some(target)) => Conversion::new(source, target)?,
        _ => Conversion::js_to_gs(),
    };

    let config_path = Config::init(dir, &conversion).context("Failed to initialize config")?;
    eprintln!("✓ Wrote {} ({})", config_path.display(), conversion);
    Ok(())
}

/// 1 for a destination collision, 2 for invalid input, 3 for anything else.
fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ExtswapError>() {
        Some(e) if e.is_conflict() => 1,
        Some(e) if e.is_invalid_input() => 2,
        _ => 3,
    }
}

fn handle_version(output: Option<OutputFormat>) -> Result<()> {
    let version_result = VersionResult {
        name: "extswap".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let format = output.unwrap_or(OutputFormat::Summary);
    println!("{}", version_result.format(format.into()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_for_conflict() {
        let err = anyhow::Error::new(ExtswapError::DestinationExists {
            from: PathBuf::from("x.gs"),
            to: PathBuf::from("x.js"),
        })
        .context("Failed to convert");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_exit_code_for_invalid_input() {
        let err = anyhow::Error::new(ExtswapError::SameSuffix(".gs".to_string()));
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = anyhow::Error::new(ExtswapError::Rename {
            from: PathBuf::from("a.gs"),
            to: PathBuf::from("a.js"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        assert_eq!(exit_code(&err), 3);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 3);
    }

    #[test]
    fn test_default_conversion_without_config() {
        let conversion = default_conversion(Path::new("/nonexistent-extswap-dir")).unwrap();
        assert_eq!(conversion, Conversion::js_to_gs());
    }
}
