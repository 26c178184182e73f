pub mod args;
mod error;
mod interface;
mod registry;

pub use error::ToolError;
pub use interface::{Secrets, Tool, ToolArgs};
pub use registry::{ToolDescriptor, ToolRegistry};
