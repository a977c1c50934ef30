//! Shared utilities

pub mod diagnostic;
pub mod interning;

pub use diagnostic::Diagnostic;
pub use interning::Name;
