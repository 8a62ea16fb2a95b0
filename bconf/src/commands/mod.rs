mod check;
mod clean;
mod completions;
mod generate;
mod init;
mod plan;

use std::path::{Path, PathBuf};

use bconf_manifest::{MANIFEST_FILE, ManifestFile};
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use clean::CleanCommand;
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use plan::PlanCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for bconf_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Manifest location shared by every command that reads one.
#[derive(Args)]
pub(crate) struct ProjectArgs {
    /// Path to buildconfig.toml
    #[arg(short, long, default_value = MANIFEST_FILE)]
    pub config: PathBuf,

    /// Project directory the build directory is resolved against
    /// (defaults to the directory containing the manifest)
    #[arg(long)]
    pub project_dir: Option<PathBuf>,
}

impl ProjectArgs {
    /// Open the manifest, exiting with a rendered report if it is invalid.
    pub fn open(&self) -> ManifestFile {
        ManifestFile::open(&self.config).unwrap_or_exit()
    }

    pub fn project_dir<'a>(&'a self, file: &'a ManifestFile) -> &'a Path {
        self.project_dir.as_deref().unwrap_or_else(|| file.dir())
    }
}

#[derive(Parser)]
#[command(name = "bconf")]
#[command(version)]
#[command(about = "Generate Java and Kotlin build-config constants from buildconfig.toml")]
pub(crate) struct Cli {
    /// Increase logging verbosity (-v: info, -vv: debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Clean(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter buildconfig.toml
    Init(InitCommand),

    /// Generate the build-config source file (the genBuildConfig task)
    Generate(GenerateCommand),

    /// Validate buildconfig.toml without generating code
    Check(CheckCommand),

    /// Show how generation is wired into the build
    Plan(PlanCommand),

    /// Remove generated output
    Clean(CleanCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
