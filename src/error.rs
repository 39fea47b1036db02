use crate::graph::VertexId;
use thiserror::Error;

/// Errors raised while validating or loading a `GraphSpec`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    #[error("Range '{field}' is empty: min {min} is greater than max {max}")]
    InvalidRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Range '{field}' must start at 1 or more, but its min is 0")]
    ZeroMinimum { field: &'static str },

    #[error("Density must be a probability in [0, 1], but was {0}")]
    InvalidDensity(f64),

    #[error("Failed to parse spec JSON: {0}")]
    Parse(String),

    #[error("Could not read spec file '{path}': {message}")]
    Io { path: String, message: String },
}

/// Structural errors in a dependency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Edge {from} -> {to} references vertex {missing}, which is not in the graph")]
    UnknownVertex {
        from: VertexId,
        to: VertexId,
        missing: VertexId,
    },

    #[error("Vertex {0} has an edge to itself")]
    SelfLoop(VertexId),

    #[error("Vertex {0} is declared more than once")]
    DuplicateVertex(VertexId),

    #[error("Graph contains a cycle through vertices {remaining:?}")]
    Cycle { remaining: Vec<VertexId> },
}

/// Errors raised by a backend renderer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Class 'Mock_{class}' depends on 'Mock_{missing}', which is not in the descriptor set")]
    UnresolvedReference { class: VertexId, missing: VertexId },

    #[error("Source vertex 'Mock_{0}' is not in the descriptor set")]
    UnknownSource(VertexId),

    #[error("Class 'Mock_{0}' has no dependents but is not listed as a source")]
    MissingSource(VertexId),

    #[error("Source vertex 'Mock_{0}' is a dependency of another class")]
    ReferencedSource(VertexId),

    #[error("Backend '{backend}' does not mirror the dependency graph: {message}")]
    Inequivalent {
        backend: &'static str,
        message: String,
    },
}

/// Any failure of the spec -> graph -> descriptors -> text pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
