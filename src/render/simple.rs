use super::arguments;
use super::plan::ProjectPlan;
use super::writer::SwiftWriter;
use crate::backend::{BackendKind, ProjectRenderer};
use crate::descriptor::property_name;

/// Flat-map backend: every instance is built up front and stored in a
/// `[ObjectIdentifier: Any]` dictionary; reads are keyed lookups.
pub struct SimpleRenderer;

impl ProjectRenderer for SimpleRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Simple
    }

    fn imports(&self) -> &'static [&'static str] {
        &["import func Benchmark.blackHole"]
    }

    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter) {
        out.open(format!(
            "public struct {}: GeneratedProject",
            self.kind().project_type_name()
        ));
        out.line("public init() {}");
        out.blank();
        out.line("public typealias Container = [ObjectIdentifier: Any]");
        out.blank();

        out.open("public func makeContainer() -> Container");
        for step in &plan.build {
            let values = arguments(&step.arguments, |p| property_name(p.dependency));
            out.call(
                &format!("let {} = {}", step.property_name(), step.type_name()),
                &values,
                "",
            );
        }
        let entries: Vec<String> = plan
            .build
            .iter()
            .map(|step| {
                format!(
                    "ObjectIdentifier({}.self): {}",
                    step.type_name(),
                    step.property_name()
                )
            })
            .collect();
        if entries.is_empty() {
            out.line("return [:]");
        } else {
            out.list("return ", ("[", "]"), &entries, "");
        }
        out.close();
        out.blank();

        out.open("public func accessAllInContainer(_ container: Container)");
        for access in &plan.traversal {
            out.line(format!(
                "blackHole(container[ObjectIdentifier({0}.self)]! as! {0})",
                access.type_name()
            ));
        }
        out.close();
        out.close();
    }
}
