use std::path::PathBuf;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use tabvis_data::Format;
use tabvis_data::TimeBound;
use tabvis_vis::Variant;

const MAX_PRECISION: i64 = 17;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Increase the log verbosity: `-v` for info and `-vv` for debug messages.
    /// The `RUST_LOG` environment variable takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate an HTML report with interactive charts from a table.
    Report(ReportArgs),
    /// List the columns of a table and how each of them would be drawn.
    Inspect(InspectArgs),
}

#[derive(Args)]
pub(crate) struct InputArgs {
    /// Specify the path of the table to read.
    /// The path must exist and it must point to a CSV, TSV or JSON file.
    #[arg(value_parser(parse_file))]
    pub(crate) input: PathBuf,

    /// Specify the name of the time column.
    #[arg(short, long, default_value = "time")]
    pub(crate) time_column: String,

    /// Specify the input format. If it is not specified then it is
    /// derived from the file extension.
    #[arg(short, long, value_enum)]
    pub(crate) format: Option<InputFormat>,

    /// Specify the field delimiter of CSV and TSV input.
    #[arg(short, long, value_parser(parse_delimiter))]
    pub(crate) delimiter: Option<u8>,
}

#[derive(Args)]
pub(crate) struct InspectArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,
}

#[derive(Args)]
pub(crate) struct ReportArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Specify the path of the generated report.
    /// An existing file is overwritten.
    #[arg(short, long, default_value = "report.html")]
    pub(crate) output: PathBuf,

    /// Specify the title of the report.
    #[arg(long, default_value = "Data Report")]
    pub(crate) title: String,

    /// Specify the page layout of the report.
    #[arg(long, value_enum, default_value_t = ReportVariant::Linked)]
    pub(crate) variant: ReportVariant,

    /// Draw only the given column. Can be repeated.
    #[arg(short, long)]
    pub(crate) include: Vec<String>,

    /// Leave out the given column. Can be repeated.
    #[arg(short = 'x', long)]
    pub(crate) exclude: Vec<String>,

    /// Specify the start of the time window, as a number or a timestamp.
    #[arg(short, long)]
    pub(crate) start: Option<TimeBound>,

    /// Specify the end of the time window, as a number or a timestamp.
    #[arg(short, long)]
    pub(crate) end: Option<TimeBound>,

    /// Inline the given plotly.js file into the report instead of loading
    /// plotly.js from the network.
    #[arg(long, value_parser(parse_file), conflicts_with = "plotly_url")]
    pub(crate) plotly_js: Option<PathBuf>,

    /// Specify the URL plotly.js is loaded from.
    #[arg(long)]
    pub(crate) plotly_url: Option<String>,

    /// Specify the delay between animation frames, in milliseconds.
    #[arg(long, default_value_t = 150)]
    pub(crate) frame_duration: u32,

    /// Specify the number of decimals of numeric times in slider labels.
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(0..=MAX_PRECISION))]
    pub(crate) precision: u16,
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum InputFormat {
    Csv,
    Tsv,
    Json,
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Csv => Format::Csv,
            InputFormat::Tsv => Format::Tsv,
            InputFormat::Json => Format::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ReportVariant {
    /// A single column of charts.
    Basic,
    /// Charts with a sidebar navigation.
    Sidebar,
    /// Sidebar navigation and time-series charts that zoom together.
    Linked,
}

impl From<ReportVariant> for Variant {
    fn from(variant: ReportVariant) -> Self {
        match variant {
            ReportVariant::Basic => Variant::Basic,
            ReportVariant::Sidebar => Variant::Sidebar,
            ReportVariant::Linked => Variant::Linked,
        }
    }
}

fn parse_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_file() {
        return Err(format!("The `{}` path must point to a file.", path.display()));
    }

    Ok(path)
}

fn parse_delimiter(delimiter: &str) -> Result<u8, String> {
    match delimiter {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(format!(
                "The `{delimiter}` delimiter must be a single ASCII character."
            )),
        },
    }
}
