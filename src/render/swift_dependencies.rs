use super::arguments;
use super::plan::ProjectPlan;
use super::writer::SwiftWriter;
use crate::backend::{BackendKind, ProjectRenderer};
use crate::descriptor::type_name;

/// Registry backend on swift-dependencies. Each type gets a `DependencyKey`
/// whose static `liveValue` is built once from the other keys' live values.
pub struct SwiftDependenciesRenderer;

impl ProjectRenderer for SwiftDependenciesRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::SwiftDependencies
    }

    fn imports(&self) -> &'static [&'static str] {
        &["import Dependencies", "import func Benchmark.blackHole"]
    }

    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter) {
        for step in &plan.build {
            let name = step.type_name();
            out.open(format!("public enum {}_Key: DependencyKey", name));
            let values = arguments(&step.arguments, |p| {
                format!("{}_Key.liveValue", type_name(p.dependency))
            });
            out.call(
                &format!("public static let liveValue = {}", name),
                &values,
                "",
            );
            out.close();
            out.blank();
            out.open("public extension DependencyValues");
            out.open(format!("var {}: {}", step.property_name(), name));
            out.line(format!("get {{ self[{}_Key.self] }}", name));
            out.line(format!("set {{ self[{}_Key.self] = newValue }}", name));
            out.close();
            out.close();
            out.blank();
        }

        out.open(format!(
            "public struct {}: GeneratedProject",
            self.kind().project_type_name()
        ));
        out.line("public init() {}");
        out.blank();

        out.open("public final class Container");
        for step in &plan.build {
            out.line(format!(
                "@Dependency(\\.{0}) public var {0}: {1}",
                step.property_name(),
                step.type_name()
            ));
        }
        out.blank();
        out.line("public init() {}");
        out.close();
        out.blank();

        out.open("public func makeContainer() -> Container");
        out.line("Container()");
        out.close();
        out.blank();

        out.open("public func accessAllInContainer(_ container: Container)");
        for access in &plan.traversal {
            out.line(format!("blackHole(container.{})", access.property_name()));
        }
        out.close();
        out.close();
    }
}
