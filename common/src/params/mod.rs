//! Input parameters for the various functions within Keysmith.

mod subject;
pub use subject::*;
