//! Standard hook implementations.

mod closure;
mod spans;

pub use closure::FnHooks;
pub use spans::TracingHooks;
