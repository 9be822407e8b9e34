//! Command handlers for PWGEN.
//!
//! Each submodule exposes the operations a front end invokes: batch
//! generation and clipboard copy/clear. Password values are never logged.

pub mod clipboard;
pub mod password_generator;
