use super::plan::ProjectPlan;
use super::writer::SwiftWriter;
use super::write_class;
use crate::backend::{BackendKind, ProjectRenderer};
use crate::descriptor::DescriptorSet;
use crate::error::RenderError;
use crate::rng::SeededRng;

/// Property-graph backend on Cleanse.
///
/// Bindings are declared up front and the whole graph is built in one step
/// into a `BuiltProductsContainer` root whose fields are the source
/// vertices. Reads follow resolved properties down from those roots.
pub struct CleanseRenderer;

impl ProjectRenderer for CleanseRenderer {
    fn kind(&self) -> BackendKind {
        BackendKind::Cleanse
    }

    fn imports(&self) -> &'static [&'static str] {
        &["import Cleanse", "import func Benchmark.blackHole"]
    }

    fn plan(&self, classes: &DescriptorSet, rng: &mut SeededRng) -> Result<ProjectPlan, RenderError> {
        Ok(ProjectPlan::rooted(classes, rng))
    }

    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter) {
        write_class("BuiltProductsContainer", &plan.roots, out);
        out.blank();

        out.open(format!(
            "public struct {}: GeneratedProject",
            self.kind().project_type_name()
        ));
        out.line("public init() {}");
        out.blank();

        out.open("public struct BenchmarkComponent: Cleanse.RootComponent");
        out.line("public typealias Root = BuiltProductsContainer");
        out.blank();
        out.open(
            "public static func configureRoot(binder: ReceiptBinder<BuiltProductsContainer>) -> BindingReceipt<BuiltProductsContainer>",
        );
        out.line("binder.to(factory: BuiltProductsContainer.init)");
        out.close();
        out.blank();
        out.open("public static func configure(binder: Binder<Singleton>)");
        for (i, step) in plan.build.iter().enumerate() {
            if i > 0 {
                out.blank();
            }
            out.line("binder");
            out.indent();
            out.line(format!(".bind({}.self)", step.type_name()));
            out.line(".sharedInScope()");
            out.line(format!(".to(factory: {}.init)", step.type_name()));
            out.dedent();
        }
        out.close();
        out.close();
        out.blank();

        out.open("public func makeContainer() -> BuiltProductsContainer");
        out.line("try! ComponentFactory.of(BenchmarkComponent.self).build(())");
        out.close();
        out.blank();

        out.open("public func accessAllInContainer(_ container: BuiltProductsContainer)");
        for access in &plan.traversal {
            out.line(format!("blackHole(container.{})", access.path.join(".")));
        }
        out.close();
        out.close();
    }
}
