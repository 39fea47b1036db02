use super::dag::{DirectedAcyclicGraph, Edge, VertexId};
use crate::error::SpecError;
use crate::rng::SeededRng;
use crate::spec::GraphSpec;

/// A generated graph together with the ranks it was built from.
///
/// Ranks only exist at generation time; most callers want [`generate`],
/// which drops them.
#[derive(Debug, Clone)]
pub struct LayeredGraph {
    pub ranks: Vec<Vec<VertexId>>,
    pub graph: DirectedAcyclicGraph,
}

impl LayeredGraph {
    /// The rank index holding `vertex`.
    pub fn rank_of(&self, vertex: VertexId) -> Option<usize> {
        self.ranks.iter().position(|rank| rank.contains(&vertex))
    }

    pub fn into_graph(self) -> DirectedAcyclicGraph {
        self.graph
    }
}

/// Generates a layered DAG from `spec`, drawing every random value from `rng`.
pub fn generate(spec: &GraphSpec, rng: &mut SeededRng) -> Result<DirectedAcyclicGraph, SpecError> {
    generate_layered(spec, rng).map(LayeredGraph::into_graph)
}

/// Generates a layered DAG and keeps its rank bookkeeping.
///
/// Draw order: the rank count, then for each rank its width followed by one
/// draw per candidate edge from the previous rank (row-major over
/// `previous x current`). Edges only join consecutive ranks, which is what
/// keeps the result acyclic.
#[tracing::instrument(skip_all, fields(width = %spec.width, height = %spec.height, density = spec.density))]
pub fn generate_layered(spec: &GraphSpec, rng: &mut SeededRng) -> Result<LayeredGraph, SpecError> {
    spec.validate()?;

    let rank_count = rng.int_in(spec.height.as_range());
    let mut ranks: Vec<Vec<VertexId>> = Vec::with_capacity(rank_count);
    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    let mut next_id: VertexId = 0;

    for _ in 0..rank_count {
        let width = rng.int_in(spec.width.as_range());
        let rank: Vec<VertexId> = (next_id..next_id + width).collect();
        next_id += width;
        vertices.extend_from_slice(&rank);

        if let Some(previous) = ranks.last() {
            for &from in previous {
                for &to in &rank {
                    if rng.unit() < spec.density {
                        edges.push(Edge::new(from, to));
                    }
                }
            }
        }
        ranks.push(rank);
    }

    tracing::debug!(
        ranks = ranks.len(),
        vertices = vertices.len(),
        edges = edges.len(),
        "generated layered graph"
    );

    Ok(LayeredGraph {
        ranks,
        graph: DirectedAcyclicGraph::assemble(vertices, edges),
    })
}
