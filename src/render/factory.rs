use super::arguments;
use super::plan::ProjectPlan;
use super::writer::SwiftWriter;
use crate::backend::{BackendKind, ProjectRenderer};
use crate::descriptor::property_name;

/// Registry backend on Factory. Registrations are computed properties on a
/// container; `.cached` keeps one instance per container.
pub struct FactoryRenderer;

impl ProjectRenderer for FactoryRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Factory
    }

    fn imports(&self) -> &'static [&'static str] {
        &["import Factory", "import func Benchmark.blackHole"]
    }

    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter) {
        out.open("public final class FactoryContainer: SharedContainer");
        out.line("public static var shared: FactoryContainer = .init()");
        out.line("public var manager: ContainerManager = .init()");
        out.blank();
        out.line("public init() {}");
        out.close();
        out.blank();

        out.open("public extension FactoryContainer");
        for (i, step) in plan.build.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.open(format!(
                "var {}: Factory<{}>",
                step.property_name(),
                step.type_name()
            ));
            out.open("self");
            let values = arguments(&step.arguments, |p| {
                format!("self.{}()", property_name(p.dependency))
            });
            out.call(&step.type_name(), &values, "");
            out.close();
            out.line(".cached");
            out.close();
        }
        out.close();
        out.blank();

        out.open(format!(
            "public struct {}: GeneratedProject",
            self.kind().project_type_name()
        ));
        out.line("public init() {}");
        out.blank();

        out.open("public func makeContainer() -> FactoryContainer");
        out.line("let container = FactoryContainer()");
        for step in &plan.build {
            out.line(format!("blackHole(container.{}())", step.property_name()));
        }
        out.line("return container");
        out.close();
        out.blank();

        out.open("public func accessAllInContainer(_ container: FactoryContainer)");
        for access in &plan.traversal {
            out.line(format!("blackHole(container.{}())", access.property_name()));
        }
        out.close();
        out.close();
    }
}
