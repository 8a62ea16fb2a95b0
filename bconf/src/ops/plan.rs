//! Plan operation - how generation is wired into the build.

use std::path::Path;

use bconf_manifest::Manifest;
use eyre::{Context, Result};

use crate::{language::LanguageSupport, reports::PlanReport};

/// Execute the plan operation.
pub fn plan(manifest: &Manifest, project_dir: &Path) -> Result<PlanReport> {
    let lang = LanguageSupport::get(manifest.buildconfig.language);
    let ctx = lang
        .pipeline()
        .run(manifest.clone(), project_dir)
        .wrap_err("pipeline failed")?;

    let plan = ctx.plan()?;
    Ok(PlanReport {
        language: manifest.buildconfig.language,
        qualified_name: ctx.config()?.qualified_name(),
        execution_order: plan.execution_order().into_iter().map(String::from).collect(),
        plan: plan.clone(),
    })
}
