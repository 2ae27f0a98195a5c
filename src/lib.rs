pub mod backend;
pub mod config;
pub mod drawer_triangle;
pub mod error;
pub mod program;
pub mod source;
pub mod stage;

#[cfg(test)]
mod mock;

pub use backend::ShaderApi;
pub use error::{ErrorKind, LoadError};
pub use program::{compile_program, link_program, load_program};
pub use source::{Stage, StageSources, FRAGMENT_MARKER, VERTEX_MARKER};
pub use stage::{compile_stage, CompiledStage};
