//! Dictionary compiler: expands an authored term tree into flat quiz records.

pub mod compiler;
pub mod error;
pub mod flatten;
pub mod kana;
pub mod pipeline;
pub mod segment;

pub use compiler::compile_entry;
pub use error::CompileError;
pub use flatten::{FlatEntry, flatten};
pub use pipeline::{compile_all, compile_all_with_category};
pub use segment::{ParenSegments, segment};
