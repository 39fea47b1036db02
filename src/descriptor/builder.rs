use super::{ClassDescriptor, DescriptorSet};
use crate::error::GraphError;
use crate::graph::{DirectedAcyclicGraph, VertexId};
use ahash::AHashMap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::Arc;

/// Orders `graph` into class descriptors, dependencies first.
///
/// A vertex becomes ready once every vertex it points to has been emitted;
/// among ready vertices the lowest id goes first, so the order is stable for
/// a given graph. Fails with [`GraphError::Cycle`] if some vertices can never
/// become ready.
#[tracing::instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn build(graph: &DirectedAcyclicGraph) -> Result<DescriptorSet, GraphError> {
    let mut pending: AHashMap<VertexId, usize> = AHashMap::with_capacity(graph.vertex_count());
    let mut dependents: AHashMap<VertexId, Vec<VertexId>> = AHashMap::new();
    for &vertex in graph.vertices() {
        pending.insert(vertex, graph.successors(vertex).len());
    }
    for edge in graph.edges() {
        dependents.entry(edge.to).or_default().push(edge.from);
    }

    let mut ready: BinaryHeap<Reverse<VertexId>> = pending
        .iter()
        .filter(|(_, count)| **count == 0)
        .map(|(&vertex, _)| Reverse(vertex))
        .collect();

    let mut built: AHashMap<VertexId, Arc<ClassDescriptor>> =
        AHashMap::with_capacity(graph.vertex_count());
    let mut classes = Vec::with_capacity(graph.vertex_count());

    while let Some(Reverse(vertex)) = ready.pop() {
        let dependencies = graph
            .successors(vertex)
            .iter()
            .filter_map(|dependency| built.get(dependency).cloned())
            .collect();
        let class = Arc::new(ClassDescriptor::new(vertex, dependencies));
        built.insert(vertex, Arc::clone(&class));
        classes.push(class);

        for &dependent in dependents.get(&vertex).map(Vec::as_slice).unwrap_or_default() {
            if let Some(count) = pending.get_mut(&dependent) {
                *count -= 1;
                if *count == 0 {
                    ready.push(Reverse(dependent));
                }
            }
        }
    }

    if classes.len() < graph.vertex_count() {
        let mut remaining: Vec<VertexId> = graph
            .vertices()
            .iter()
            .copied()
            .filter(|v| !built.contains_key(v))
            .collect();
        remaining.sort_unstable();
        return Err(GraphError::Cycle { remaining });
    }

    let sources = graph
        .source_vertices()
        .into_iter()
        .filter_map(|vertex| built.get(&vertex).cloned())
        .collect();

    tracing::debug!(classes = classes.len(), "ordered class descriptors");
    Ok(DescriptorSet::new(classes, sources))
}
