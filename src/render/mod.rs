//! Rendering of class descriptors into Swift projects, one file per backend.

pub mod plan;
pub mod writer;

mod carpenter;
mod cleanse;
mod factory;
mod needle;
mod simple;
mod swift_dependencies;
mod swinject;

pub use carpenter::CarpenterRenderer;
pub use cleanse::CleanseRenderer;
pub use factory::FactoryRenderer;
pub use needle::NeedleRenderer;
pub use simple::SimpleRenderer;
pub use swift_dependencies::SwiftDependenciesRenderer;
pub use swinject::SwinjectRenderer;

use crate::backend::BackendKind;
use crate::descriptor::{DescriptorSet, Parameter, type_name};
use crate::error::RenderError;
use crate::rng::SeededRng;
use plan::{ProjectPlan, TypeDecl};
use writer::SwiftWriter;

/// Knobs that change the generated text without changing the object graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepend a `package-benchmark` suite and the `GeneratedProject`
    /// protocol, making the file runnable on its own.
    pub benchmark_harness: bool,
}

/// The text one backend produced for one graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProject {
    pub backend: BackendKind,
    pub source: String,
}

impl RenderedProject {
    pub fn file_name(&self, stem: &str) -> String {
        self.backend.file_name(stem)
    }
}

/// Renders `classes` with the backend `kind`.
///
/// Rejects descriptor sets with dangling references before anything is
/// planned, and refuses to print a plan that does not mirror the set.
#[tracing::instrument(skip(classes, options, rng), fields(classes = classes.len()))]
pub fn render(
    kind: BackendKind,
    classes: &DescriptorSet,
    options: RenderOptions,
    rng: &mut SeededRng,
) -> Result<RenderedProject, RenderError> {
    classes.validate()?;

    let renderer = kind.renderer();
    let plan = renderer.plan(classes, rng)?;
    plan.verify(classes, kind)?;

    let mut out = SwiftWriter::new();
    out.line("// Generated by kumitate. Do not edit.");
    out.line(format!(
        "// {} classes, {} constructions, {} reads.",
        classes.len(),
        plan.construction_count(),
        plan.read_count()
    ));
    out.blank();
    if options.benchmark_harness {
        out.line("import Benchmark");
    }
    for import in renderer.imports() {
        out.line(import);
    }
    out.blank();
    if options.benchmark_harness {
        write_harness(kind, &mut out);
    }
    for decl in &plan.types {
        write_type_decl(decl, &mut out);
        out.blank();
    }
    renderer.print(&plan, &mut out);

    let source = out.finish();
    tracing::debug!(bytes = source.len(), "rendered project");
    Ok(RenderedProject {
        backend: kind,
        source,
    })
}

/// `public final class Mock_N` with stored fields and a memberwise init.
pub(crate) fn write_type_decl(decl: &TypeDecl, out: &mut SwiftWriter) {
    write_class(&decl.type_name(), &decl.fields, out);
}

pub(crate) fn write_class(name: &str, fields: &[Parameter], out: &mut SwiftWriter) {
    out.open(format!("public final class {}", name));
    if fields.is_empty() {
        out.line("public init() {}");
        out.close();
        return;
    }
    for field in fields {
        out.line(format!(
            "public let {}: {}",
            field.label,
            type_name(field.dependency)
        ));
    }
    out.blank();
    let parameters: Vec<String> = fields
        .iter()
        .map(|f| format!("{}: {}", f.label, type_name(f.dependency)))
        .collect();
    out.call("public init", &parameters, " {");
    out.indent();
    for field in fields {
        out.line(format!("self.{0} = {0}", field.label));
    }
    out.close();
    out.close();
}

/// Constructor arguments `label: <expr for dependency>`.
pub(crate) fn arguments(
    parameters: &[Parameter],
    value: impl Fn(&Parameter) -> String,
) -> Vec<String> {
    parameters
        .iter()
        .map(|p| format!("{}: {}", p.label, value(p)))
        .collect()
}

fn write_harness(kind: BackendKind, out: &mut SwiftWriter) {
    let project = kind.project_type_name();

    out.open("public protocol GeneratedProject");
    out.line("associatedtype Container");
    out.blank();
    out.line("func makeContainer() -> Container");
    out.line("func accessAllInContainer(_ container: Container)");
    out.close();
    out.blank();

    out.open("let benchmarks =");
    out.list(
        "Benchmark",
        ("(", ")"),
        &[
            format!("\"{} - Create container\"", project),
            "configuration: .init(maxDuration: .seconds(10))".to_string(),
        ],
        " { benchmark in",
    );
    out.indent();
    out.line(format!("let project = {}()", project));
    out.open("for _ in benchmark.scaledIterations");
    out.line("blackHole(project.makeContainer())");
    out.close();
    out.close();
    out.blank();
    out.list(
        "Benchmark",
        ("(", ")"),
        &[
            format!("\"{} - Read all from container\"", project),
            "configuration: .init(maxDuration: .seconds(10))".to_string(),
        ],
        " { benchmark in",
    );
    out.indent();
    out.line(format!("let project = {}()", project));
    out.line("let container = project.makeContainer()");
    out.blank();
    out.line("benchmark.startMeasurement()");
    out.open("for _ in benchmark.scaledIterations");
    out.line("project.accessAllInContainer(container)");
    out.close();
    out.close();
    out.close();
    out.blank();
}
