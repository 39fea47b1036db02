use crate::error::GraphError;
use ahash::{AHashMap, AHashSet};
use serde::{Serialize, Serializer};

/// Integer identity of a vertex. Also the `name` of its class descriptor.
pub type VertexId = usize;

/// A directed edge `from -> to`: `from` needs `to` to be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
}

impl Edge {
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}

impl Serialize for Edge {
    /// Serialized as a `[from, to]` pair.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.from, self.to).serialize(serializer)
    }
}

/// A set of vertices and directed edges.
///
/// Graphs coming out of the generator are acyclic by construction. Graphs
/// assembled by hand through [`DirectedAcyclicGraph::from_parts`] are only
/// checked for dangling edges and self-loops; cycles surface when the graph
/// is ordered into class descriptors.
#[derive(Debug, Clone, Serialize)]
pub struct DirectedAcyclicGraph {
    vertices: Vec<VertexId>,
    edges: Vec<Edge>,
    #[serde(skip)]
    successors: AHashMap<VertexId, Vec<VertexId>>,
    #[serde(skip)]
    in_degrees: AHashMap<VertexId, usize>,
}

impl DirectedAcyclicGraph {
    /// Builds a graph from explicit vertex and edge lists.
    ///
    /// Duplicate edges are kept: a vertex may need the same dependency twice.
    pub fn from_parts(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut known = AHashSet::with_capacity(vertices.len());
        for &vertex in &vertices {
            if !known.insert(vertex) {
                return Err(GraphError::DuplicateVertex(vertex));
            }
        }
        for edge in &edges {
            if edge.from == edge.to {
                return Err(GraphError::SelfLoop(edge.from));
            }
            for endpoint in [edge.from, edge.to] {
                if !known.contains(&endpoint) {
                    return Err(GraphError::UnknownVertex {
                        from: edge.from,
                        to: edge.to,
                        missing: endpoint,
                    });
                }
            }
        }
        Ok(Self::assemble(vertices, edges))
    }

    /// Skips validation; the generator only produces well-formed parts.
    pub(crate) fn assemble(vertices: Vec<VertexId>, edges: Vec<Edge>) -> Self {
        let mut successors: AHashMap<VertexId, Vec<VertexId>> = AHashMap::new();
        let mut in_degrees: AHashMap<VertexId, usize> =
            vertices.iter().map(|&v| (v, 0)).collect();
        for edge in &edges {
            successors.entry(edge.from).or_default().push(edge.to);
            *in_degrees.entry(edge.to).or_default() += 1;
        }
        Self {
            vertices,
            edges,
            successors,
            in_degrees,
        }
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.in_degrees.contains_key(&vertex)
    }

    /// The vertices `vertex` has edges to, in edge insertion order.
    pub fn successors(&self, vertex: VertexId) -> &[VertexId] {
        self.successors
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn in_degree(&self, vertex: VertexId) -> usize {
        self.in_degrees.get(&vertex).copied().unwrap_or(0)
    }

    /// Vertices with no incoming edges, in vertex order.
    pub fn source_vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .copied()
            .filter(|&v| self.in_degree(v) == 0)
            .collect()
    }
}

impl PartialEq for DirectedAcyclicGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices && self.edges == other.edges
    }
}

impl Eq for DirectedAcyclicGraph {}
