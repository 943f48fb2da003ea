//! Infrastructure layer - store implementations and process plumbing

pub mod logging;
pub mod team;
