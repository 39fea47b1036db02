use super::plan::ProjectPlan;
use super::writer::SwiftWriter;
use crate::backend::{BackendKind, ProjectRenderer};

/// Property-graph backend on Carpenter. Factories are declared on a
/// dependency container, handed to a `Carpenter` and built in one step.
pub struct CarpenterRenderer;

impl ProjectRenderer for CarpenterRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Carpenter
    }

    fn imports(&self) -> &'static [&'static str] {
        &["import Carpenter", "import func Benchmark.blackHole"]
    }

    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter) {
        out.open("public final class CarpenterContainer: DependencyContainer");
        out.line("public static var shared: CarpenterContainer = .init()");
        out.line("public init() {}");
        out.blank();
        for step in &plan.build {
            out.line(format!(
                "public let {} = Factory({}.init)",
                step.property_name(),
                step.type_name()
            ));
        }
        out.close();
        out.blank();

        out.open(format!(
            "public struct {}: GeneratedProject",
            self.kind().project_type_name()
        ));
        out.line("public init() {}");
        out.blank();

        out.open("public func makeContainer() -> Carpenter");
        out.open("var carpenter = try! Carpenter");
        for step in &plan.build {
            out.line(format!("CarpenterContainer.shared.{}", step.property_name()));
        }
        out.close();
        out.blank();
        out.line("try! carpenter.build()");
        out.line("return carpenter");
        out.close();
        out.blank();

        out.open("public func accessAllInContainer(_ container: Carpenter)");
        for access in &plan.traversal {
            out.line(format!(
                "blackHole(GetDependency(carpenter: container, \\CarpenterContainer.{}).wrappedValue)",
                access.property_name()
            ));
        }
        out.close();
        out.close();
    }
}
