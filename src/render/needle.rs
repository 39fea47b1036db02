use super::arguments;
use super::plan::ProjectPlan;
use super::writer::SwiftWriter;
use crate::backend::{BackendKind, ProjectRenderer};
use crate::descriptor::property_name;

/// Property-graph backend on Needle. Every type is a `shared` property of one
/// bootstrap component, so each is built once and read as a property.
///
/// The output needs Needle's code generator to provide
/// `registerProviderFactories()`.
pub struct NeedleRenderer;

impl ProjectRenderer for NeedleRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Needle
    }

    fn imports(&self) -> &'static [&'static str] {
        &["import NeedleFoundation", "import func Benchmark.blackHole"]
    }

    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter) {
        out.open(format!(
            "public struct {}: GeneratedProject",
            self.kind().project_type_name()
        ));
        out.line("public init() {}");
        out.blank();

        out.open("public final class ContainerComponent: BootstrapComponent");
        for (i, step) in plan.build.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.open(format!(
                "public var {}: {}",
                step.property_name(),
                step.type_name()
            ));
            out.open("shared");
            let values = arguments(&step.arguments, |p| property_name(p.dependency));
            out.call(&step.type_name(), &values, "");
            out.close();
            out.close();
        }
        out.close();
        out.blank();

        out.open("public func makeContainer() -> ContainerComponent");
        out.line("registerProviderFactories()");
        out.line("return ContainerComponent()");
        out.close();
        out.blank();

        out.open("public func accessAllInContainer(_ container: ContainerComponent)");
        for access in &plan.traversal {
            out.line(format!("blackHole(container.{})", access.property_name()));
        }
        out.close();
        out.close();
    }
}
