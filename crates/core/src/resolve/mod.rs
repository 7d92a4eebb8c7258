pub mod context;
pub mod overload;
pub mod resolver;

pub use context::ResolutionContext;
pub use resolver::{resolve_call, resolve_file};
