use clap::Args;
use eyre::{Context, Result};

use super::ProjectArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PlanCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

impl PlanCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.project.open();
        let report = ops::plan(file.manifest(), self.project.project_dir(&file))?;

        if self.json {
            let json =
                serde_json::to_string_pretty(&report).wrap_err("failed to serialize build plan")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
