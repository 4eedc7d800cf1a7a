use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser};

/// Put a header image on top of every image under the current directory whose
/// path matches a regex. Results are written next to each input as `output_<name>`.
#[derive(Parser, Debug)]
#[command(name = "imgheader", version)]
struct Cli {
    /// Regex matched in full against `/`-joined paths relative to the current directory (e.g. `/sub/a\.png`).
    #[arg(value_name = "IMAGE_FILE_REGEX", allow_hyphen_values = true)]
    pattern: Option<String>,

    /// Header image placed on top of each matched image.
    #[arg(value_name = "HEADER_IMAGE", allow_hyphen_values = true)]
    header: Option<PathBuf>,

    #[arg(hide = true)]
    extra: Vec<String>,

    /// Increase log verbosity (-v, -vv, -vvv). Put `--` before a regex or path
    /// that would otherwise be read as this flag, e.g. `imgheader -- -v h.png`.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    imgheader::init_logging(cli.verbose);

    let (pattern, header_path) = match (cli.pattern, cli.header) {
        (None, None) => {
            Cli::command().print_long_help()?;
            return Ok(ExitCode::SUCCESS);
        }
        (Some(pattern), Some(header)) if cli.extra.is_empty() => (pattern, header),
        _ => {
            eprintln!("Invalid number of arguments.");
            eprintln!("{}", Cli::command().render_usage());
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = imgheader::RunConfig {
        pattern,
        header_path,
        root: Path::new(".").to_path_buf(),
    };
    let stats = imgheader::run(&config).context("imgheader run")?;

    println!("{}", stats.summary());
    Ok(ExitCode::SUCCESS)
}
