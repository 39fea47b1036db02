//! Backend-neutral description of a generated project.
//!
//! A plan says which types exist, in which order instances are built and
//! in which order they are read back. Printers turn it into text; the
//! equivalence check runs on the plan, not on the text.

use crate::backend::BackendKind;
use crate::descriptor::{DescriptorSet, Parameter, property_name, type_name};
use crate::error::RenderError;
use crate::graph::VertexId;
use crate::rng::SeededRng;
use ahash::AHashMap;
use itertools::Itertools;
use std::collections::VecDeque;

/// A generated class with one stored field per constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub vertex: VertexId,
    pub fields: Vec<Parameter>,
}

impl TypeDecl {
    pub fn type_name(&self) -> String {
        type_name(self.vertex)
    }
}

/// Construction of one instance from its dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStep {
    pub vertex: VertexId,
    pub arguments: Vec<Parameter>,
}

impl BuildStep {
    pub fn type_name(&self) -> String {
        type_name(self.vertex)
    }

    pub fn property_name(&self) -> String {
        property_name(self.vertex)
    }
}

/// One read of an instance during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Access {
    pub vertex: VertexId,
    /// Property labels to follow from the container's roots. Empty for a
    /// direct lookup of `vertex`.
    pub path: Vec<String>,
}

impl Access {
    pub fn direct(vertex: VertexId) -> Self {
        Self {
            vertex,
            path: Vec::new(),
        }
    }

    pub fn type_name(&self) -> String {
        type_name(self.vertex)
    }

    pub fn property_name(&self) -> String {
        property_name(self.vertex)
    }
}

/// The project a backend will print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    pub types: Vec<TypeDecl>,
    /// Fields of the externally supplied root object, for backends that have one.
    pub roots: Vec<Parameter>,
    /// Construction order, dependencies first.
    pub build: Vec<BuildStep>,
    pub traversal: Vec<Access>,
}

impl ProjectPlan {
    /// One type and one build step per descriptor in construction order, and
    /// a direct read of every descriptor in shuffled order.
    pub fn standard(classes: &DescriptorSet, rng: &mut SeededRng) -> Self {
        let types = classes
            .classes()
            .iter()
            .map(|class| TypeDecl {
                vertex: class.name(),
                fields: class.parameters(),
            })
            .collect();
        let build = classes
            .classes()
            .iter()
            .map(|class| BuildStep {
                vertex: class.name(),
                arguments: class.parameters(),
            })
            .collect();

        let mut traversal: Vec<Access> = classes
            .classes()
            .iter()
            .map(|class| Access::direct(class.name()))
            .collect();
        rng.shuffle(&mut traversal);

        Self {
            types,
            roots: Vec::new(),
            build,
            traversal,
        }
    }

    /// Like [`ProjectPlan::standard`], but the source vertices become fields
    /// of a root object and every read walks a property path from a root.
    ///
    /// Each vertex's path is the first one found by a breadth-first walk
    /// from the sources in order.
    pub fn rooted(classes: &DescriptorSet, rng: &mut SeededRng) -> Self {
        let mut plan = Self::standard(classes, rng);
        plan.roots = classes
            .sources()
            .iter()
            .map(|source| Parameter {
                label: source.property_name(),
                dependency: source.name(),
            })
            .collect();

        let mut paths: AHashMap<VertexId, Vec<String>> = AHashMap::new();
        let mut queue = VecDeque::new();
        for root in &plan.roots {
            if !paths.contains_key(&root.dependency) {
                paths.insert(root.dependency, vec![root.label.clone()]);
                queue.push_back(root.dependency);
            }
        }
        while let Some(vertex) = queue.pop_front() {
            let Some(class) = classes.get(vertex) else {
                continue;
            };
            let prefix = paths.get(&vertex).cloned().unwrap_or_default();
            for parameter in class.parameters() {
                if paths.contains_key(&parameter.dependency) {
                    continue;
                }
                let mut path = prefix.clone();
                path.push(parameter.label);
                paths.insert(parameter.dependency, path);
                queue.push_back(parameter.dependency);
            }
        }

        for access in &mut plan.traversal {
            if let Some(path) = paths.remove(&access.vertex) {
                access.path = path;
            }
        }
        plan
    }

    pub fn construction_count(&self) -> usize {
        self.build.len()
    }

    pub fn read_count(&self) -> usize {
        self.traversal.len()
    }

    /// Checks that this plan mirrors `classes` exactly: one type, one
    /// construction and one read per descriptor, with every construction
    /// placed after the constructions of its dependencies.
    pub fn verify(&self, classes: &DescriptorSet, backend: BackendKind) -> Result<(), RenderError> {
        let fail = |message: String| RenderError::Inequivalent {
            backend: backend.id(),
            message,
        };

        let declared = self.types.iter().map(|t| t.vertex).counts();
        let built = self.build.iter().map(|s| s.vertex).counts();
        let read = self.traversal.iter().map(|a| a.vertex).counts();
        for class in classes.classes() {
            let name = class.name();
            for (what, counts) in [("declared", &declared), ("built", &built), ("read", &read)] {
                let seen = counts.get(&name).copied().unwrap_or(0);
                if seen != 1 {
                    return Err(fail(format!("Mock_{} is {} {} times", name, what, seen)));
                }
            }
        }
        for (what, len) in [
            ("types", self.types.len()),
            ("constructions", self.build.len()),
            ("reads", self.traversal.len()),
        ] {
            if len != classes.len() {
                return Err(fail(format!(
                    "{} {} for {} classes",
                    len,
                    what,
                    classes.len()
                )));
            }
        }

        let mut position: AHashMap<VertexId, usize> = AHashMap::new();
        for (index, step) in self.build.iter().enumerate() {
            let expected = classes
                .get(step.vertex)
                .map(|class| class.parameters())
                .unwrap_or_default();
            if step.arguments != expected {
                return Err(fail(format!(
                    "Mock_{} is built with the wrong arguments",
                    step.vertex
                )));
            }
            if let Some(late) = step
                .arguments
                .iter()
                .find(|a| !position.contains_key(&a.dependency))
            {
                return Err(fail(format!(
                    "Mock_{} is built before its dependency Mock_{}",
                    step.vertex, late.dependency
                )));
            }
            position.insert(step.vertex, index);
        }

        for access in &self.traversal {
            if access.path.is_empty() {
                if !self.roots.is_empty() {
                    return Err(fail(format!(
                        "Mock_{} is not reachable from a root",
                        access.vertex
                    )));
                }
                continue;
            }
            let reached = self.follow(classes, &access.path);
            if reached != Some(access.vertex) {
                return Err(fail(format!(
                    "path {} does not lead to Mock_{}",
                    access.path.join("."),
                    access.vertex
                )));
            }
        }
        Ok(())
    }

    /// Resolves a property path starting at one of the roots.
    fn follow(&self, classes: &DescriptorSet, path: &[String]) -> Option<VertexId> {
        let (first, rest) = path.split_first()?;
        let mut current = self.roots.iter().find(|r| &r.label == first)?.dependency;
        for label in rest {
            current = classes
                .get(current)?
                .parameters()
                .into_iter()
                .find(|p| &p.label == label)?
                .dependency;
        }
        Some(current)
    }
}
