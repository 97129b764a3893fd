//! Front-end components for the exam results portal.

pub mod logging;
pub mod render;
pub mod server;
