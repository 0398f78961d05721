//! Application bootstrapping.
pub mod logging;
