use std::path::{Path, PathBuf};

use bconf_codegen::{generation::StarterManifest, host::Toolchain};
use bconf_core::{GeneratedFile, WriteResult};
use bconf_manifest::MANIFEST_FILE;
use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct InitCommand {
    /// Group id of the project, used as the fallback package
    #[arg(short, long, default_value = "com.example")]
    pub group: String,

    /// Toolchain the project is compiled with (java or kotlin)
    #[arg(short, long, default_value = "java")]
    pub toolchain: Toolchain,

    /// Directory to write buildconfig.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let starter = StarterManifest::new(&self.group, self.toolchain);
        let path = starter.path(&self.output);

        match starter.write(&self.output)? {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                if self.output != Path::new(".") {
                    println!("  cd {}", self.output.display());
                }
                println!("  bconf generate");
            }
            WriteResult::Skipped => {
                println!("{} already exists, left unchanged", MANIFEST_FILE);
            }
        }
        Ok(())
    }
}
