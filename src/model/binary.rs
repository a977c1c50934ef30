//! Binary variants of a component.
//!
//! A component owns one binary per build variant (debug/release, target
//! machine, test). Binaries appear incrementally while the build is being
//! configured, so everything keyed on them runs through standing rules.

use serde::{Deserialize, Serialize};

use crate::util::Name;

/// The kind of artifact a binary produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryKind {
    /// Executable binary
    #[serde(alias = "exe")]
    Executable,

    /// Static library archive (.a / .lib)
    #[serde(alias = "static")]
    StaticLibrary,

    /// Shared/dynamic library (.so / .dylib / .dll)
    #[serde(alias = "shared")]
    SharedLibrary,

    /// Executable that runs a test suite
    #[serde(alias = "test")]
    TestExecutable,
}

impl Default for BinaryKind {
    fn default() -> Self {
        BinaryKind::Executable
    }
}

impl BinaryKind {
    /// Check if this binary publishes a link-time artifact.
    pub fn is_linkable(&self) -> bool {
        matches!(self, BinaryKind::StaticLibrary | BinaryKind::SharedLibrary)
    }

    /// Check if this is a shared library.
    pub fn is_shared_library(&self) -> bool {
        matches!(self, BinaryKind::SharedLibrary)
    }

    /// Check if this is a test suite executable.
    pub fn is_test_executable(&self) -> bool {
        matches!(self, BinaryKind::TestExecutable)
    }
}

/// One buildable variant of a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Binary {
    /// Variant name, e.g. `mainDebug` or `mainDebugTestExecutable`
    pub name: Name,

    /// What kind of artifact this variant produces
    #[serde(default)]
    pub kind: BinaryKind,
}

impl Binary {
    /// Create a new binary with the given name and kind.
    pub fn new(name: impl Into<Name>, kind: BinaryKind) -> Self {
        Binary {
            name: name.into(),
            kind,
        }
    }

    /// Create a new executable binary.
    pub fn executable(name: impl Into<Name>) -> Self {
        Self::new(name, BinaryKind::Executable)
    }

    /// Create a new static library binary.
    pub fn static_library(name: impl Into<Name>) -> Self {
        Self::new(name, BinaryKind::StaticLibrary)
    }

    /// Create a new shared library binary.
    pub fn shared_library(name: impl Into<Name>) -> Self {
        Self::new(name, BinaryKind::SharedLibrary)
    }

    /// Create a new test executable binary.
    pub fn test_executable(name: impl Into<Name>) -> Self {
        Self::new(name, BinaryKind::TestExecutable)
    }
}
