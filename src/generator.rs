use crate::backend::BackendKind;
use crate::descriptor::{self, DescriptorSet};
use crate::error::{GenerationError, RenderError};
use crate::graph::{self, DirectedAcyclicGraph};
use crate::render::{self, RenderOptions, RenderedProject};
use crate::rng::SeededRng;
use crate::spec::GraphSpec;
use rayon::prelude::*;

/// Drives spec -> graph -> descriptors, and hands out a [`Workload`] to render.
pub struct ProjectGenerator {
    spec: GraphSpec,
    options: RenderOptions,
}

pub struct ProjectGeneratorBuilder {
    spec: GraphSpec,
    options: RenderOptions,
}

impl ProjectGeneratorBuilder {
    pub fn new(spec: GraphSpec) -> Self {
        Self {
            spec,
            options: RenderOptions::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.spec = self.spec.with_seed(seed);
        self
    }

    pub fn with_benchmark_harness(mut self, enabled: bool) -> Self {
        self.options.benchmark_harness = enabled;
        self
    }

    pub fn build(self) -> ProjectGenerator {
        ProjectGenerator {
            spec: self.spec,
            options: self.options,
        }
    }
}

impl ProjectGenerator {
    pub fn builder(spec: GraphSpec) -> ProjectGeneratorBuilder {
        ProjectGeneratorBuilder::new(spec)
    }

    pub fn spec(&self) -> &GraphSpec {
        &self.spec
    }

    /// Validates the spec, generates the graph and orders it into descriptors.
    pub fn generate(&self) -> Result<Workload, GenerationError> {
        let mut rng = SeededRng::new(self.spec.seed);
        let graph = graph::generate(&self.spec, &mut rng)?;
        let classes = descriptor::build(&graph)?;
        tracing::info!(
            seed = self.spec.seed,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            sources = classes.sources().len(),
            "generated dependency graph"
        );
        Ok(Workload {
            seed: self.spec.seed,
            options: self.options,
            graph,
            classes,
        })
    }
}

/// One generated graph and its descriptors, ready to render with any backend.
///
/// Each backend draws from its own generator derived from the seed and the
/// backend, so a backend's text does not depend on which others are rendered
/// or in what order.
#[derive(Debug, Clone)]
pub struct Workload {
    seed: u64,
    options: RenderOptions,
    graph: DirectedAcyclicGraph,
    classes: DescriptorSet,
}

impl Workload {
    pub fn graph(&self) -> &DirectedAcyclicGraph {
        &self.graph
    }

    pub fn classes(&self) -> &DescriptorSet {
        &self.classes
    }

    pub fn render(&self, kind: BackendKind) -> Result<RenderedProject, RenderError> {
        let mut rng = SeededRng::derive(self.seed, kind.stream());
        render::render(kind, &self.classes, self.options, &mut rng)
    }

    /// Renders every backend in `kinds` in parallel. One backend failing
    /// does not stop the others; results come back in the order asked for.
    pub fn render_all(&self, kinds: &[BackendKind]) -> Vec<Result<RenderedProject, RenderError>> {
        kinds.par_iter().map(|&kind| self.render(kind)).collect()
    }

    /// The graph as a GraphViz document.
    pub fn to_dot(&self) -> String {
        graph::to_dot(&self.graph)
    }
}
