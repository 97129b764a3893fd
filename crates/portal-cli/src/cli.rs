//! CLI argument definitions for the exam results portal.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;
use portal_model::SearchMode;

#[derive(Parser)]
#[command(
    name = "exam-portal",
    version,
    about = "Exam results portal - clean the results sheet and look up students",
    long_about = "Clean a final exam results sheet and look up individual students.\n\n\
                  Students are found by serial number or by phone number. Queries may\n\
                  use Arabic-Indic or Western digits and may include separators or a\n\
                  country code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

    /// Append logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load and clean the results sheet, then print what the cleaning did.
    Check(SourceArgs),

    /// Look up one student.
    Lookup(LookupArgs),

    /// Serve the search form and lookup API over HTTP.
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Path to the results sheet (Excel workbook or CSV).
    #[arg(
        long = "source",
        value_name = "PATH",
        env = "EXAM_PORTAL_SOURCE",
        default_value = "final_exam_results.xlsx"
    )]
    pub source: PathBuf,
}

#[derive(Args)]
pub struct LookupArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Search by serial number or by phone number.
    #[arg(long = "by", value_enum, default_value = "id")]
    pub by: SearchModeArg,

    /// Print the record as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// The serial number or phone number, exactly as typed.
    #[arg(value_name = "QUERY", allow_hyphen_values = true)]
    pub query: String,
}

#[derive(Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Address to listen on.
    #[arg(
        long = "bind",
        value_name = "ADDR",
        env = "EXAM_PORTAL_BIND",
        default_value = "0.0.0.0:5000"
    )]
    pub bind: SocketAddr,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SearchModeArg {
    Id,
    Phone,
}

impl From<SearchModeArg> for SearchMode {
    fn from(arg: SearchModeArg) -> Self {
        match arg {
            SearchModeArg::Id => SearchMode::Id,
            SearchModeArg::Phone => SearchMode::Phone,
        }
    }
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
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn lookup_keeps_the_raw_query() {
        let cli = Cli::parse_from(["exam-portal", "lookup", "--by", "phone", "+20 101 234 5678"]);
        let Command::Lookup(args) = cli.command else {
            panic!("expected lookup");
        };
        assert!(matches!(args.by, SearchModeArg::Phone));
        assert_eq!(args.query, "+20 101 234 5678");
        assert!(!args.json);
    }

    #[test]
    fn serve_parses_bind_address() {
        let cli = Cli::parse_from(["exam-portal", "serve", "--bind", "127.0.0.1:8080"]);
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.bind.port(), 8080);
    }
}
