//! CLI Adapter.

mod candidates;
mod resolve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::config::{CallerLocation, ResolveOptions};
use crate::app::logging;
use crate::domain::{AppError, RootStrategy, Target};

#[derive(Parser)]
#[command(name = "pkgroot")]
#[command(version)]
#[command(
    about = "Find the package directory a location belongs to",
    long_about = None
)]
struct Cli {
    /// Print resolution steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved package directory
    #[clap(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        target: TargetArgs,
        /// Use the async pipeline
        #[arg(long = "async")]
        use_async: bool,
        /// Print a JSON object instead of a bare path
        #[arg(long)]
        json: bool,
    },
    /// Print the ordered manifest candidates as JSON
    #[clap(visible_alias = "c")]
    Candidates {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    ClosestConsumer,
    FurthestAncestor,
}

impl From<StrategyArg> for RootStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::ClosestConsumer => RootStrategy::ClosestConsumer,
            StrategyArg::FurthestAncestor => RootStrategy::FurthestAncestor,
        }
    }
}

#[derive(Args)]
struct TargetArgs {
    /// Resolve the consuming project's root instead of the caller's package
    #[arg(long, conflicts_with_all = ["dir", "self_package"])]
    root: bool,
    /// Root selection strategy
    #[arg(long, value_enum, requires = "root")]
    strategy: Option<StrategyArg>,
    /// Walk up from this directory
    #[arg(long, conflicts_with = "self_package")]
    dir: Option<PathBuf>,
    /// Resolve this library's own package (testing only)
    #[arg(long = "self", requires = "self_location")]
    self_package: bool,
    /// Caller location (file or directory); defaults to the working directory
    #[arg(long, conflicts_with = "from_url")]
    from: Option<PathBuf>,
    /// Caller location as a file:// URL
    #[arg(long)]
    from_url: Option<String>,
    /// This library's install location
    #[arg(long)]
    self_location: Option<PathBuf>,
    /// Manifest file name
    #[arg(long)]
    manifest: Option<String>,
    /// Disable own-manifest detection
    #[arg(long)]
    skip_self_check: bool,
}

impl TargetArgs {
    fn target(&self) -> Target {
        if self.self_package {
            Target::SelfPackage
        } else if let Some(dir) = &self.dir {
            Target::ExplicitDirectory(dir.clone())
        } else if self.root {
            Target::Root { strategy: self.strategy.map(RootStrategy::from).unwrap_or_default() }
        } else {
            Target::Caller
        }
    }

    fn options(&self) -> Result<ResolveOptions, AppError> {
        let mut options = ResolveOptions::new();
        if let Some(from) = &self.from {
            let caller = if from.is_file() {
                CallerLocation::File(from.clone())
            } else {
                CallerLocation::Directory(from.clone())
            };
            options = options.with_caller(caller);
        }
        if let Some(url) = &self.from_url {
            options = options.with_caller(CallerLocation::from_file_url(url)?);
        }
        if let Some(location) = &self.self_location {
            options = options.with_self_location(location.clone());
        }
        if let Some(manifest) = &self.manifest {
            options = options.with_manifest_name(manifest.clone());
        }
        if self.skip_self_check {
            options = options.skip_self_check_for_testing();
        }
        Ok(options)
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::set_up_logging(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Resolve { target, use_async, json } => {
            resolve::run_resolve(&target, use_async, json)
        }
        Commands::Candidates { target } => candidates::run_candidates(&target),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
