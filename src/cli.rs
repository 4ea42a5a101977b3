//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::builtin_catalog::BuiltinCatalog;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::file_fetch_adapter::FileFetchAdapter;
#[cfg(feature = "http")]
use crate::adapters::http_fetch_adapter::HttpFetchAdapter;
use crate::adapters::json_report_adapter::JsonReportAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::adapters::tracing_observer::TracingObserver;
use crate::domain::analysis::run_analysis;
use crate::domain::error::CotError;
use crate::domain::report_date::resolve_date;
use crate::domain::settings::{OutputFormat, OutputSettings, SourceSettings, default_instrument};
use crate::ports::catalog_port::CatalogPort;
use crate::ports::fetch_port::FetchPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "cotbias",
    about = "Contrarian market bias from CFTC Commitments of Traders reports"
)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze one instrument
    Analyze {
        /// Instrument id, e.g. "EURO FX" (defaults to [analysis] instrument)
        #[arg(short, long)]
        instrument: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Read a saved report page instead of fetching
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List supported instruments
    List {
        #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
        format: FormatArg,
    },
    /// Print the report date of a saved report page
    Date {
        #[arg(long)]
        input: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Analyze {
            instrument,
            config,
            input,
            format,
            output,
        } => run_analyze(
            instrument.as_deref(),
            config.as_deref(),
            input.as_deref(),
            format,
            output.as_deref(),
        ),
        Command::List { format } => run_list(format),
        Command::Date { input } => run_date(&input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<FileConfigAdapter, CotError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            FileConfigAdapter::from_file(path)
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

fn run_analyze(
    instrument: Option<&str>,
    config_path: Option<&Path>,
    input: Option<&Path>,
    format: Option<FormatArg>,
    output: Option<&Path>,
) -> Result<(), CotError> {
    let config = load_config(config_path)?;
    let sources = SourceSettings::from_config(&config)?;
    let mut output_settings = OutputSettings::from_config(&config)?;
    if let Some(format) = format {
        output_settings.format = format.into();
    }
    let instrument = instrument
        .map(str::to_string)
        .unwrap_or_else(|| default_instrument(&config));

    let fetcher = build_fetcher(input, sources)?;
    let report = run_analysis(&BuiltinCatalog, fetcher.as_ref(), &TracingObserver, &instrument)?;

    let renderer: Box<dyn ReportPort> = match output_settings.format {
        OutputFormat::Text => Box::new(TextReportAdapter),
        OutputFormat::Json => Box::new(JsonReportAdapter::new(output_settings.pretty)),
    };
    let rendered = renderer.render(&report)?;
    emit(&rendered, output)
}

fn build_fetcher(
    input: Option<&Path>,
    sources: SourceSettings,
) -> Result<Box<dyn FetchPort>, CotError> {
    if let Some(path) = input {
        return Ok(Box::new(FileFetchAdapter::new(path)));
    }
    http_fetcher(sources)
}

#[cfg(feature = "http")]
fn http_fetcher(sources: SourceSettings) -> Result<Box<dyn FetchPort>, CotError> {
    Ok(Box::new(HttpFetchAdapter::new(sources)?))
}

#[cfg(not(feature = "http"))]
fn http_fetcher(_sources: SourceSettings) -> Result<Box<dyn FetchPort>, CotError> {
    Err(CotError::ConfigInvalid {
        section: "sources".to_string(),
        key: "url".to_string(),
        reason: "built without http support; pass --input".to_string(),
    })
}

fn run_list(format: FormatArg) -> Result<(), CotError> {
    let instruments = BuiltinCatalog.list_all();
    let rendered = match format {
        FormatArg::Json => {
            serde_json::to_string_pretty(&instruments).map_err(|e| CotError::Render {
                reason: e.to_string(),
            })?
        }
        FormatArg::Text => {
            let width = instruments.iter().map(|s| s.id.len()).max().unwrap_or(0);
            let mut out = String::new();
            for spec in &instruments {
                out.push_str(&format!(
                    "{:<width$}  {:<9}  {}\n",
                    spec.id, spec.source_group, spec.description
                ));
            }
            out
        }
    };
    emit(&rendered, None)
}

fn run_date(input: &Path) -> Result<(), CotError> {
    let raw = fs::read_to_string(input)?;
    let date = resolve_date(&raw);
    tracing::debug!(path = %input.display(), known = date.is_known(), "date resolved");
    emit(&format!("{date}\n"), None)
}

fn emit(rendered: &str, output: Option<&Path>) -> Result<(), CotError> {
    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
