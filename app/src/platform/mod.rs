//! Platform-specific integrations, currently the system clipboard.

pub mod clipboard;
