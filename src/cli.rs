use crate::catalog::Education;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "career-match",
    version,
    about = "Career recommendation from skills, interests and education"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of ./career-match.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend a career for the given selection
    Predict(PredictCommand),
    /// Interactively pick skills, interests and education
    Pick(PickCommand),
    /// List every skill known to the catalog
    Skills(CatalogSource),
    /// List every interest known to the catalog
    Interests(CatalogSource),
    /// Show the career profiles
    Catalog(CatalogCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    Simple,
    Weighted,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

#[derive(Args)]
pub struct CatalogSource {
    /// TOML catalog to use instead of the built-in profiles
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct PredictCommand {
    /// Selected skill; repeat or separate with commas
    #[arg(short, long = "skill", value_delimiter = ',')]
    pub skills: Vec<String>,

    /// Selected interest; repeat or separate with commas
    #[arg(short, long = "interest", value_delimiter = ',')]
    pub interests: Vec<String>,

    #[arg(short, long)]
    pub education: Option<Education>,

    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Include every profile's score in the output
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub source: CatalogSource,
}

#[derive(Args)]
pub struct PickCommand {
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub source: CatalogSource,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[command(flatten)]
    pub source: CatalogSource,
}
