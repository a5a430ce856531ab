//! CLI command implementations.

mod export;
mod serve;

pub(crate) use export::ExportArgs;
pub(crate) use serve::ServeArgs;
