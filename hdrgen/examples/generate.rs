//! Generates a C header from an XML API description.
//!
//! Run with: `cargo run --example generate -- webgpu.xml -o webgpu.h`
//!
//! Without an output path the header is written to stdout. Set `RUST_LOG`
//! to see loader and generator events on stderr.

use clap::Parser;
use hdrgen::prelude::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate")]
#[command(about = "Generate a C header from an XML API description", long_about = None)]
struct Cli {
    /// XML API description
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output header path (stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Include guard macro (defaults to `{PREFIX}_H_`)
    #[arg(long = "include-guard", value_name = "MACRO")]
    include_guard: Option<String>,

    /// Omit the `extern "C"` wrapper
    #[arg(long = "no-extern-c")]
    no_extern_c: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let xml = std::fs::read_to_string(&cli.input)?;
    let schema = parse_schema(&xml)?;
    validate_schema(&schema)?;
    let ir = SchemaIr::from_schema(&schema)?;

    let mut generator = Generator::new(&ir).extern_c(!cli.no_extern_c);
    if let Some(guard) = cli.include_guard {
        generator = generator.include_guard(guard);
    }
    let header = generator.generate();

    match cli.output {
        Some(output) => {
            std::fs::write(&output, header)?;
            eprintln!("Wrote {}", output.display());
        }
        None => print!("{}", header),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "generate",
            "webgpu.xml",
            "-o",
            "webgpu.h",
            "--include-guard",
            "WEBGPU_H_",
            "--no-extern-c",
        ])
        .expect("Failed to parse arguments");

        assert_eq!(cli.input, PathBuf::from("webgpu.xml"));
        assert_eq!(cli.output, Some(PathBuf::from("webgpu.h")));
        assert_eq!(cli.include_guard.as_deref(), Some("WEBGPU_H_"));
        assert!(cli.no_extern_c);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["generate", "webgpu.xml"]).expect("Failed to parse arguments");

        assert!(cli.output.is_none());
        assert!(cli.include_guard.is_none());
        assert!(!cli.no_extern_c);
        assert!(Cli::try_parse_from(["generate"]).is_err());
    }
}
