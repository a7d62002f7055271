//! Output formatting for the sps CLI.

pub mod helpers;
pub mod sync;
pub mod targets;
