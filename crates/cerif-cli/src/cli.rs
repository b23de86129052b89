//! CLI argument definitions for the CERIF converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cerif_model::OutputCharset;

#[derive(Parser)]
#[command(
    name = "csv2cerif",
    version,
    about = "Convert research information CSV exports to a CERIF XML document",
    long_about = "Convert researchers, departments, research groups, projects and\n\
                  publications exported as CSV into one CERIF 1.6 XML document.\n\n\
                  Relation tables link every entity to people; unknown people are\n\
                  added as unchecked persons so no reference is left dangling."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names and email addresses in log records.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a folder of CSV tables into a CERIF XML document.
    Convert(ConvertArgs),

    /// Print the effective classification catalog.
    Semantics(SemanticsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Folder holding the CSV tables (researchers.csv, departments.csv, ...).
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Output document path ending in .xml, or `-` for stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE", default_value = "-")]
    pub out: String,

    /// RUCT code of the institution, written as the source database.
    #[arg(short = 'r', long = "ruct", value_name = "CODE")]
    pub ruct: String,

    /// Character encoding of the written document.
    #[arg(short = 'c', long = "charset", value_name = "CHARSET", default_value = "UTF-8")]
    pub charset: OutputCharset,

    /// Indent the written document.
    #[arg(short = 'f', long = "formatted")]
    pub formatted: bool,

    /// Field delimiter of the CSV tables (`tab` for tab-separated input).
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: String,

    /// Encoding label of the CSV tables (e.g. utf-8, windows-1252).
    #[arg(long = "input-encoding", value_name = "LABEL", default_value = "utf-8")]
    pub input_encoding: String,

    /// TOML file overriding classification scheme/class identifiers.
    #[arg(long = "semantics", value_name = "PATH")]
    pub semantics: Option<PathBuf>,

    /// Seed for reproducible identifiers.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<String>,

    /// Classify researchers from the researchers table as unchecked.
    #[arg(long = "unchecked")]
    pub unchecked: bool,

    /// Convert and report without writing the document.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct SemanticsArgs {
    /// TOML file overriding classification scheme/class identifiers.
    #[arg(long = "semantics", value_name = "PATH")]
    pub semantics: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_convert_flags() {
        let cli = Cli::parse_from([
            "csv2cerif",
            "convert",
            "data",
            "-o",
            "out/cerif.xml",
            "-r",
            "1234",
            "-c",
            "iso-8859-1",
            "-f",
            "-d",
            "tab",
            "--seed",
            "abc",
            "--unchecked",
            "--log-data",
        ]);
        assert!(cli.log_data);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.input_dir, PathBuf::from("data"));
        assert_eq!(args.out, "out/cerif.xml");
        assert_eq!(args.ruct, "1234");
        assert_eq!(args.charset, OutputCharset::Iso88591);
        assert!(args.formatted);
        assert_eq!(args.delimiter, "tab");
        assert_eq!(args.seed.as_deref(), Some("abc"));
        assert!(args.unchecked);
        assert!(!args.dry_run);
    }

    #[test]
    fn convert_requires_ruct() {
        let result = Cli::try_parse_from(["csv2cerif", "convert", "data"]);
        assert!(result.is_err());
    }

    #[test]
    fn convert_defaults() {
        let cli = Cli::parse_from(["csv2cerif", "convert", "data", "--ruct", "1"]);
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.out, "-");
        assert_eq!(args.charset, OutputCharset::Utf8);
        assert_eq!(args.delimiter, ";");
        assert_eq!(args.input_encoding, "utf-8");
        assert!(!args.formatted);
    }

    #[test]
    fn rejects_unknown_charset() {
        let result = Cli::try_parse_from(["csv2cerif", "convert", "data", "-r", "1", "-c", "ebcdic"]);
        assert!(result.is_err());
    }
}
