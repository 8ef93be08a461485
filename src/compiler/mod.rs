//! Query compilation subsystem
//!
//! Renders an already-mapped criteria tree into the search engine's
//! boolean-query document, ready for JSON serialization. Compilation is
//! read-only, deterministic, and all-or-nothing: operators without a
//! rendering rule and structurally invalid criteria fail the whole call.

mod compiler;
mod errors;

pub use compiler::QueryCompiler;
pub use errors::{CompilerError, CompilerResult};
