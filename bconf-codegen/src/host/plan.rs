//! Build plan: the generation step and how it is wired into compilation.

use std::{
    collections::{HashMap, VecDeque},
    path::{Path, PathBuf},
};

use bconf_ir::Defaults;
use bconf_manifest::Language;
use serde::Serialize;

use super::Toolchain;

/// One step of the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub name: String,
    /// Tasks that must run before this one.
    pub depends_on: Vec<String>,
    /// Declared outputs.
    pub outputs: Vec<PathBuf>,
}

/// A directory the compile step reads sources from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRoot {
    pub path: PathBuf,
    /// Compile task that consumes this root.
    pub consumer: String,
}

/// Tasks and source roots for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub toolchain: Toolchain,
    pub tasks: Vec<Task>,
    pub source_roots: Vec<SourceRoot>,
}

impl BuildPlan {
    /// Wire the generation step in front of the toolchain's compile step.
    ///
    /// The output directory is `<build_dir>/<output_subdir>/<language>/main`;
    /// it is the generation task's only output and a source root of the
    /// compile task.
    pub fn wire(
        toolchain: Toolchain,
        language: Language,
        build_dir: &Path,
        defaults: &Defaults,
    ) -> Self {
        let output_dir = build_dir
            .join(defaults.output_subdir)
            .join(language.as_str())
            .join("main");
        let compile = toolchain.compile_task();

        let generate = Task {
            name: defaults.task_name.to_string(),
            depends_on: Vec::new(),
            outputs: vec![output_dir.clone()],
        };
        let compile_task = Task {
            name: compile.to_string(),
            depends_on: vec![defaults.task_name.to_string()],
            outputs: Vec::new(),
        };

        tracing::debug!(
            %toolchain,
            task = defaults.task_name,
            before = compile,
            output = %output_dir.display(),
            "wired generation step"
        );

        Self {
            toolchain,
            tasks: vec![generate, compile_task],
            source_roots: vec![SourceRoot {
                path: output_dir,
                consumer: compile.to_string(),
            }],
        }
    }

    /// Look up a task by name.
    pub fn task(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// The output directory of the generation task.
    pub fn output_dir(&self, defaults: &Defaults) -> Option<&Path> {
        self.task(defaults.task_name)
            .and_then(|t| t.outputs.first())
            .map(PathBuf::as_path)
    }

    /// Task names in an order that respects every dependency.
    ///
    /// Ties keep declaration order. Dependencies on tasks outside the plan
    /// are ignored; tasks caught in a cycle are left out.
    pub fn execution_order(&self) -> Vec<&str> {
        let index: HashMap<&str, usize> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, t)| (t.name.as_str(), i))
            .collect();

        let mut pending = vec![0usize; self.tasks.len()];
        let mut dependents = vec![Vec::new(); self.tasks.len()];
        for (i, task) in self.tasks.iter().enumerate() {
            for dep in &task.depends_on {
                if let Some(&d) = index.get(dep.as_str()) {
                    pending[i] += 1;
                    dependents[d].push(i);
                }
            }
        }

        let mut ready: VecDeque<usize> = (0..self.tasks.len()).filter(|&i| pending[i] == 0).collect();
        let mut order = Vec::with_capacity(self.tasks.len());
        while let Some(i) = ready.pop_front() {
            order.push(self.tasks[i].name.as_str());
            for &next in &dependents[i] {
                pending[next] -= 1;
                if pending[next] == 0 {
                    ready.push_back(next);
                }
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_java() {
        let defaults = Defaults::default();
        let plan = BuildPlan::wire(Toolchain::Java, Language::Java, Path::new("build"), &defaults);

        let expected = Path::new("build/generated/source/buildconfig/java/main");
        assert_eq!(plan.output_dir(&defaults), Some(expected));
        assert_eq!(
            plan.source_roots,
            [SourceRoot {
                path: expected.to_path_buf(),
                consumer: "compileJava".to_string(),
            }]
        );

        let compile = plan.task("compileJava").unwrap();
        assert_eq!(compile.depends_on, ["genBuildConfig"]);
        assert!(plan.task("compileKotlin").is_none());
        assert_eq!(plan.execution_order(), ["genBuildConfig", "compileJava"]);
    }

    #[test]
    fn test_wire_kotlin_output() {
        let defaults = Defaults::default();
        let plan = BuildPlan::wire(
            Toolchain::Kotlin,
            Language::Kotlin,
            Path::new("out"),
            &defaults,
        );
        assert_eq!(
            plan.output_dir(&defaults),
            Some(Path::new("out/generated/source/buildconfig/kotlin/main"))
        );
        assert_eq!(plan.source_roots[0].consumer, "compileKotlin");
    }

    #[test]
    fn test_execution_order_respects_dependencies() {
        let task = |name: &str, deps: &[&str]| Task {
            name: name.to_string(),
            depends_on: deps.iter().map(|d| d.to_string()).collect(),
            outputs: Vec::new(),
        };
        let plan = BuildPlan {
            toolchain: Toolchain::Java,
            tasks: vec![
                task("jar", &["compileJava"]),
                task("compileJava", &["genBuildConfig", "processResources"]),
                task("genBuildConfig", &[]),
                task("processResources", &["missing"]),
            ],
            source_roots: Vec::new(),
        };
        assert_eq!(
            plan.execution_order(),
            ["genBuildConfig", "processResources", "compileJava", "jar"]
        );
    }

    #[test]
    fn test_execution_order_drops_cycles() {
        let plan = BuildPlan {
            toolchain: Toolchain::Java,
            tasks: vec![
                Task {
                    name: "a".to_string(),
                    depends_on: vec!["b".to_string()],
                    outputs: Vec::new(),
                },
                Task {
                    name: "b".to_string(),
                    depends_on: vec!["a".to_string()],
                    outputs: Vec::new(),
                },
            ],
            source_roots: Vec::new(),
        };
        assert!(plan.execution_order().is_empty());
    }

    #[test]
    fn test_serialize_plan() {
        let plan = BuildPlan::wire(
            Toolchain::Java,
            Language::Java,
            Path::new("build"),
            &Defaults::default(),
        );
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["toolchain"], "java");
        assert_eq!(json["tasks"][0]["name"], "genBuildConfig");
        assert_eq!(json["tasks"][1]["depends_on"][0], "genBuildConfig");
    }
}
