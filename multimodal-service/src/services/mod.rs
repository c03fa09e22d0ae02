pub mod invocation;
pub mod providers;

pub use invocation::invoke_model;
pub use providers::{ModelClient, ModelError, Part};
