//! Console apps.
pub mod app;
