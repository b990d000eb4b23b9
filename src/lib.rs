pub mod aggregate;
pub mod compose;
pub mod csv;
pub mod demo;
pub mod error;
pub mod maybe;
pub mod transform;

pub use error::PipelineError;
pub use maybe::{Maybe, Truthy};
