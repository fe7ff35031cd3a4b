//! Path navigation and the message render pipeline.

mod diagnostic;
mod error;
mod navigator;
mod renderer;

pub use error::PathError;
pub use navigator::{get, navigate};
pub use renderer::Resolver;
