use crate::descriptor::DescriptorSet;
use crate::error::RenderError;
use crate::render::plan::ProjectPlan;
use crate::render::writer::SwiftWriter;
use crate::render::{
    CarpenterRenderer, CleanseRenderer, FactoryRenderer, NeedleRenderer, SimpleRenderer,
    SwiftDependenciesRenderer, SwinjectRenderer,
};
use crate::rng::SeededRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a backend represents and resolves its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerStyle {
    /// One mapping from type identity to a prebuilt instance.
    FlatMap,
    /// Named registrations whose factories resolve dependencies recursively.
    Registry,
    /// Dependencies declared up front, resolved by a single build step.
    PropertyGraph,
}

/// The available code generation backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// Plain dictionary keyed by `ObjectIdentifier`.
    Simple,
    Swinject,
    Factory,
    #[serde(alias = "swiftDependencies")]
    SwiftDependencies,
    Cleanse,
    Needle,
    Carpenter,
}

impl BackendKind {
    pub const ALL: [BackendKind; 7] = [
        BackendKind::Simple,
        BackendKind::Swinject,
        BackendKind::Factory,
        BackendKind::SwiftDependencies,
        BackendKind::Cleanse,
        BackendKind::Needle,
        BackendKind::Carpenter,
    ];

    /// Stable identifier used in spec files, CLI flags and file names.
    pub fn id(self) -> &'static str {
        match self {
            BackendKind::Simple => "simple",
            BackendKind::Swinject => "swinject",
            BackendKind::Factory => "factory",
            BackendKind::SwiftDependencies => "swift-dependencies",
            BackendKind::Cleanse => "cleanse",
            BackendKind::Needle => "needle",
            BackendKind::Carpenter => "carpenter",
        }
    }

    /// Name of the generated `GeneratedProject` conformer.
    pub fn project_type_name(self) -> &'static str {
        match self {
            BackendKind::Simple => "GeneratedBySimple",
            BackendKind::Swinject => "GeneratedBySwinject",
            BackendKind::Factory => "GeneratedByFactory",
            BackendKind::SwiftDependencies => "GeneratedBySwiftDependencies",
            BackendKind::Cleanse => "GeneratedByCleanse",
            BackendKind::Needle => "GeneratedByNeedle",
            BackendKind::Carpenter => "GeneratedByCarpenter",
        }
    }

    pub fn style(self) -> ContainerStyle {
        match self {
            BackendKind::Simple => ContainerStyle::FlatMap,
            BackendKind::Swinject | BackendKind::Factory | BackendKind::SwiftDependencies => {
                ContainerStyle::Registry
            }
            BackendKind::Cleanse | BackendKind::Needle | BackendKind::Carpenter => {
                ContainerStyle::PropertyGraph
            }
        }
    }

    /// Index of this backend's random stream; see [`SeededRng::derive`].
    pub fn stream(self) -> u64 {
        match self {
            BackendKind::Simple => 0,
            BackendKind::Swinject => 1,
            BackendKind::Factory => 2,
            BackendKind::SwiftDependencies => 3,
            BackendKind::Cleanse => 4,
            BackendKind::Needle => 5,
            BackendKind::Carpenter => 6,
        }
    }

    /// Output file name for a spec file with the given stem.
    pub fn file_name(self, stem: &str) -> String {
        format!("{}-{}.swift", stem, self.id())
    }

    pub fn renderer(self) -> &'static dyn ProjectRenderer {
        match self {
            BackendKind::Simple => &SimpleRenderer,
            BackendKind::Swinject => &SwinjectRenderer,
            BackendKind::Factory => &FactoryRenderer,
            BackendKind::SwiftDependencies => &SwiftDependenciesRenderer,
            BackendKind::Cleanse => &CleanseRenderer,
            BackendKind::Needle => &NeedleRenderer,
            BackendKind::Carpenter => &CarpenterRenderer,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BackendKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| format!("unknown backend '{}'", s))
    }
}

/// A code generation backend: lowers descriptors to a plan, then prints it.
///
/// The plan is where the object graph is decided; printing only chooses the
/// container idiom. Keeping the two apart is what lets every backend's plan
/// be checked against the same descriptor set.
pub trait ProjectRenderer: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Import lines the generated file starts with.
    fn imports(&self) -> &'static [&'static str];

    /// Lowers the descriptors into this backend's plan.
    fn plan(&self, classes: &DescriptorSet, rng: &mut SeededRng) -> Result<ProjectPlan, RenderError> {
        Ok(ProjectPlan::standard(classes, rng))
    }

    /// Emits everything after the shared type declarations.
    fn print(&self, plan: &ProjectPlan, out: &mut SwiftWriter);
}
