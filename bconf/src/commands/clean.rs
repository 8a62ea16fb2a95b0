use clap::Args;
use eyre::Result;

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only remove generated files left behind by earlier runs
    #[arg(long)]
    pub stale: bool,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.project.open();

        let report = ops::clean(
            file.manifest(),
            ops::clean::CleanOptions {
                project_dir: self.project.project_dir(&file),
                stale_only: self.stale,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
