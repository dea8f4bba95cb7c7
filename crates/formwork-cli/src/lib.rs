//! Library components of the `formwork` command line tool.

pub mod definition;
pub mod logging;
pub mod pipeline;
