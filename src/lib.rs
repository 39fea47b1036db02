//! # Kumitate - Dependency Graph Synthesis for DI Benchmarks
//!
//! **Kumitate** generates artificial object-dependency graphs and emits, for each
//! graph, Swift projects that build the same object graph with different
//! dependency-injection containers: a flat dictionary, resolver registries and
//! declarative property graphs. Because every backend builds and reads the exact
//! same graph, the construction and resolution cost of each container style can
//! be benchmarked against an identical workload.
//!
//! ## Core Workflow
//!
//! 1.  **Describe the graph**: a `GraphSpec` gives the width range (vertices per
//!     rank), height range (number of ranks), edge density and a 64-bit seed. It is
//!     usually loaded from a small JSON `.spec` file through `SpecDocument`.
//! 2.  **Generate**: `ProjectGenerator::generate` draws a layered DAG from the
//!     seed and orders it into `ClassDescriptor`s, dependencies first.
//! 3.  **Render**: `Workload::render` lowers the descriptors into a `ProjectPlan`,
//!     checks that the plan constructs and reads every class exactly once, and
//!     prints it in the chosen backend's idiom.
//!
//! The same seed always gives the same graph and the same text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kumitate::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let spec = GraphSpec::new(SizeRange::new(1, 10), SizeRange::new(15, 20), 0.8, 42);
//!
//!     let workload = ProjectGenerator::builder(spec)
//!         .with_benchmark_harness(true)
//!         .build()
//!         .generate()?;
//!     println!(
//!         "{} classes, {} dependencies",
//!         workload.graph().vertex_count(),
//!         workload.graph().edge_count()
//!     );
//!
//!     for result in workload.render_all(&BackendKind::ALL) {
//!         let project = result?;
//!         std::fs::write(project.file_name("project"), &project.source)?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod graph;
pub mod prelude;
pub mod render;
pub mod rng;
pub mod spec;
