//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the `sf`
//! adapter, HTTP, CI variable stores, environment loading, and manifest
//! reading.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod http;
pub mod project;
pub mod sf_cli;
pub mod variable_store;
