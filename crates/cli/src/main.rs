mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use textprompts_core::MetadataMode;

#[derive(Debug, Parser)]
#[command(
    name = "textprompts",
    version,
    about = "Inspect, check, and render prompt files with TOML front matter"
)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/textprompts/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print the resolved settings
    Doctor,

    /// Print a prompt's body, or the whole prompt as JSON
    Show(ShowArgs),

    /// List the placeholders a prompt expects
    Placeholders(PlaceholdersArgs),

    /// Substitute values into a prompt and print the result
    Format(FormatArgs),

    /// Parse prompt files and report the ones that fail
    Check(CheckArgs),

    /// Create a prompt file with a front matter header
    New(NewArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Prompt file
    pub file: PathBuf,

    /// Metadata mode: strict, allow, or ignore (default from config)
    #[arg(long)]
    pub meta: Option<MetadataMode>,

    /// Print path, metadata, placeholders, and body as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct PlaceholdersArgs {
    /// Prompt file
    pub file: PathBuf,

    #[arg(long)]
    pub meta: Option<MetadataMode>,

    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Prompt file
    pub file: PathBuf,

    /// Named value as KEY=VALUE; integers and decimals are passed as numbers
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = cmd::format::parse_var)]
    pub vars: Vec<(String, String)>,

    /// Positional value, bound to {0}, {1}, ... in order
    #[arg(long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    /// Leave placeholders without a value in place instead of failing
    #[arg(long)]
    pub partial: bool,

    #[arg(long)]
    pub meta: Option<MetadataMode>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Prompt files or directories
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Descend into subdirectories
    #[arg(long, short)]
    pub recursive: bool,

    /// File name pattern inside directories (default from config, "*.txt")
    #[arg(long)]
    pub glob: Option<String>,

    #[arg(long)]
    pub meta: Option<MetadataMode>,

    /// Maximum number of files to check; 0 for no limit
    #[arg(long)]
    pub max_files: Option<usize>,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Output file path to create
    pub file: PathBuf,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub version: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    /// Prompt body; a placeholder line is written when omitted
    #[arg(long)]
    pub body: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        // Doctor reports config errors itself instead of failing on them.
        Commands::Doctor => cmd::doctor::run(config),
        Commands::Show(args) => {
            cmd::setup(config);
            cmd::show::run(&args);
        }
        Commands::Placeholders(args) => {
            cmd::setup(config);
            cmd::placeholders::run(&args);
        }
        Commands::Format(args) => {
            cmd::setup(config);
            cmd::format::run(&args);
        }
        Commands::Check(args) => {
            let rc = cmd::setup(config);
            cmd::check::run(&rc, &args);
        }
        Commands::New(args) => {
            cmd::setup(config);
            cmd::new::run(&args);
        }
    }

    logging::shutdown();
}
