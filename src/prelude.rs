//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the kumitate crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kumitate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let document = SpecDocument::from_file("path/to/project.spec")?;
//! let workload = ProjectGenerator::builder(document.graph).build().generate()?;
//!
//! let project = workload.render(BackendKind::Swinject)?;
//! println!("{}", project.source);
//! # Ok(())
//! # }
//! ```

// Pipeline
pub use crate::generator::{ProjectGenerator, Workload};
pub use crate::render::{RenderOptions, RenderedProject, render};

// Model
pub use crate::backend::{BackendKind, ContainerStyle, ProjectRenderer};
pub use crate::descriptor::{ClassDescriptor, DescriptorSet};
pub use crate::graph::{DirectedAcyclicGraph, Edge, VertexId};
pub use crate::rng::SeededRng;
pub use crate::spec::{BackendSelection, GraphSpec, SizeRange, SpecDocument};

// Error types
pub use crate::error::{GenerationError, GraphError, RenderError, SpecError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
