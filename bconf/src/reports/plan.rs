//! Plan command report data structures.

use bconf_codegen::host::BuildPlan;
use bconf_manifest::Language;
use serde::Serialize;

use super::output::{Output, Report};

/// How the generation step is wired into the build.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    /// Output language.
    pub language: Language,
    /// Fully qualified name of the generated type.
    pub qualified_name: String,
    /// Task names in the order they run.
    pub execution_order: Vec<String>,
    pub plan: BuildPlan,
}

impl Report for PlanReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Toolchain", &self.plan.toolchain.to_string());
        out.key_value("Language", self.language.as_str());
        out.key_value("Generates", &self.qualified_name);
        out.newline();

        out.section("Tasks");
        for (i, name) in self.execution_order.iter().enumerate() {
            out.numbered_item(i + 1, name);
            let Some(task) = self.plan.task(name) else {
                continue;
            };
            if !task.depends_on.is_empty() {
                out.key_value_indented("depends on", &task.depends_on.join(", "));
            }
            for output in &task.outputs {
                out.key_value_indented("output", &output.display().to_string());
            }
        }
        out.newline();

        out.section("Source roots");
        for root in &self.plan.source_roots {
            out.list_item(&format!("{} ({})", root.path.display(), root.consumer));
        }
    }
}
