//! Common test utilities for building graphs, specs and descriptor sets.
use kumitate::prelude::*;

/// Builds a hand-made graph from vertex ids and `(from, to)` pairs.
#[allow(dead_code)]
pub fn graph(vertices: &[VertexId], edges: &[(VertexId, VertexId)]) -> DirectedAcyclicGraph {
    DirectedAcyclicGraph::from_parts(
        vertices.to_vec(),
        edges.iter().map(|&(from, to)| Edge::new(from, to)).collect(),
    )
    .expect("test graph should be well-formed")
}

/// Orders a hand-made graph into descriptors.
#[allow(dead_code)]
pub fn classes(vertices: &[VertexId], edges: &[(VertexId, VertexId)]) -> DescriptorSet {
    kumitate::descriptor::build(&graph(vertices, edges)).expect("test graph should be acyclic")
}

/// A spec with fixed rank width and count.
#[allow(dead_code)]
pub fn fixed_spec(width: usize, height: usize, density: f64, seed: u64) -> GraphSpec {
    GraphSpec::new(
        SizeRange::exactly(width),
        SizeRange::exactly(height),
        density,
        seed,
    )
}

/// A mid-sized, irregular spec used by the cross-backend tests.
#[allow(dead_code)]
pub fn irregular_spec(seed: u64) -> GraphSpec {
    GraphSpec::new(SizeRange::new(1, 6), SizeRange::new(4, 8), 0.5, seed)
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
#[allow(dead_code)]
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// The classic diamond: 0 needs 1 and 2, which both need 3.
#[allow(dead_code)]
pub fn diamond() -> DescriptorSet {
    classes(&[0, 1, 2, 3], &[(0, 1), (0, 2), (1, 3), (2, 3)])
}

/// Routes `tracing` output through the test harness. Safe to call from every test.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
