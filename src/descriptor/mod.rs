//! Rendering-time class descriptors derived from a dependency graph.

mod builder;

pub use builder::build;

use crate::error::RenderError;
use crate::graph::VertexId;
use ahash::{AHashMap, AHashSet};
use std::sync::Arc;

/// Name of the generated type for a vertex.
pub fn type_name(name: VertexId) -> String {
    format!("Mock_{}", name)
}

/// Name of the generated property or variable holding a vertex's instance.
pub fn property_name(name: VertexId) -> String {
    format!("mock_{}", name)
}

/// One constructor parameter of a generated type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Argument label and stored field name.
    pub label: String,
    pub dependency: VertexId,
}

/// A vertex as a class: its name and the descriptors it needs to be built.
#[derive(Debug, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: VertexId,
    dependencies: Vec<Arc<ClassDescriptor>>,
}

impl ClassDescriptor {
    pub fn new(name: VertexId, dependencies: Vec<Arc<ClassDescriptor>>) -> Self {
        Self { name, dependencies }
    }

    /// A descriptor with no dependencies.
    pub fn leaf(name: VertexId) -> Self {
        Self::new(name, Vec::new())
    }

    pub fn name(&self) -> VertexId {
        self.name
    }

    pub fn type_name(&self) -> String {
        type_name(self.name)
    }

    pub fn property_name(&self) -> String {
        property_name(self.name)
    }

    /// Direct dependencies in edge order, duplicates included.
    pub fn dependencies(&self) -> &[Arc<ClassDescriptor>] {
        &self.dependencies
    }

    pub fn dependency_names(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.dependencies.iter().map(|d| d.name)
    }

    /// Constructor parameters, one per dependency.
    ///
    /// The first reference to a dependency is labelled `mock_<id>`; the k-th
    /// repeat of the same dependency is labelled `mock_<id>_<k>`.
    pub fn parameters(&self) -> Vec<Parameter> {
        let mut seen: AHashMap<VertexId, usize> = AHashMap::new();
        self.dependency_names()
            .map(|dependency| {
                let repeat = seen.entry(dependency).or_insert(0);
                let label = match *repeat {
                    0 => property_name(dependency),
                    k => format!("{}_{}", property_name(dependency), k),
                };
                *repeat += 1;
                Parameter { label, dependency }
            })
            .collect()
    }
}

/// The ordered descriptors of one graph plus its source (in-degree zero) subset.
///
/// `classes` is a construction order: every descriptor comes after all of its
/// dependencies. The set is immutable and cheap to share between renderers.
#[derive(Debug, Clone)]
pub struct DescriptorSet {
    classes: Vec<Arc<ClassDescriptor>>,
    sources: Vec<Arc<ClassDescriptor>>,
    index: AHashMap<VertexId, usize>,
}

impl DescriptorSet {
    /// Wraps already-ordered descriptors. Nothing is checked here; renderers
    /// call [`DescriptorSet::validate`] before emitting anything.
    pub fn new(classes: Vec<Arc<ClassDescriptor>>, sources: Vec<Arc<ClassDescriptor>>) -> Self {
        let index = classes
            .iter()
            .enumerate()
            .map(|(position, class)| (class.name(), position))
            .collect();
        Self {
            classes,
            sources,
            index,
        }
    }

    pub fn classes(&self) -> &[Arc<ClassDescriptor>] {
        &self.classes
    }

    pub fn sources(&self) -> &[Arc<ClassDescriptor>] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, name: VertexId) -> Option<&Arc<ClassDescriptor>> {
        self.index.get(&name).and_then(|&i| self.classes.get(i))
    }

    /// Position of `name` in the construction order.
    pub fn position(&self, name: VertexId) -> Option<usize> {
        self.index.get(&name).copied()
    }

    /// Checks that every dependency and every source names a descriptor in the set,
    /// and that the sources are exactly the descriptors nothing depends on.
    pub fn validate(&self) -> Result<(), RenderError> {
        let names: AHashSet<VertexId> = self.index.keys().copied().collect();
        for class in &self.classes {
            if let Some(missing) = class.dependency_names().find(|d| !names.contains(d)) {
                return Err(RenderError::UnresolvedReference {
                    class: class.name(),
                    missing,
                });
            }
        }
        if let Some(source) = self.sources.iter().find(|s| !names.contains(&s.name())) {
            return Err(RenderError::UnknownSource(source.name()));
        }

        let referenced: AHashSet<VertexId> = self
            .classes
            .iter()
            .flat_map(|c| c.dependency_names())
            .collect();
        if let Some(source) = self.sources.iter().find(|s| referenced.contains(&s.name())) {
            return Err(RenderError::ReferencedSource(source.name()));
        }
        let listed: AHashSet<VertexId> = self.sources.iter().map(|s| s.name()).collect();
        if let Some(class) = self
            .classes
            .iter()
            .find(|c| !referenced.contains(&c.name()) && !listed.contains(&c.name()))
        {
            return Err(RenderError::MissingSource(class.name()));
        }
        Ok(())
    }
}
