use super::arguments;
use super::plan::ProjectPlan;
use super::writer::SwiftWriter;
use crate::backend::{BackendKind, ProjectRenderer};
use crate::descriptor::type_name;

/// Registry backend on Swinject. Each registration resolves its dependencies
/// through the resolver; `.container` scope keeps one instance per type.
pub struct SwinjectRenderer;

impl ProjectRenderer for SwinjectRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Swinject
    }

    fn imports(&self) -> &'static [&'static str] {
        &["import Swinject", "import func Benchmark.blackHole"]
    }

    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter) {
        out.open(format!(
            "public struct {}: GeneratedProject",
            self.kind().project_type_name()
        ));
        out.line("public init() {}");
        out.blank();

        out.open("public func makeContainer() -> Container");
        out.line("let container = Container()");
        out.blank();
        for step in &plan.build {
            out.open(format!(
                "container.register({}.self) {{ r in",
                step.type_name()
            ));
            let values = arguments(&step.arguments, |p| {
                format!("r.resolve({}.self)!", type_name(p.dependency))
            });
            out.call(&step.type_name(), &values, "");
            out.close();
            out.line(".inObjectScope(.container)");
        }
        out.blank();
        out.line("return container");
        out.close();
        out.blank();

        out.open("public func accessAllInContainer(_ container: Container)");
        for access in &plan.traversal {
            out.line(format!(
                "blackHole(container.resolve({}.self)!)",
                access.type_name()
            ));
        }
        out.close();
        out.close();
    }
}
