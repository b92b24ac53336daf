//! sd-populate core
//!
//! Core types shared by the service-discovery populator crates.
//!
//! This crate contains:
//! - Domain types: target groups and their labels, as read from the input file
//! - DTOs: the shapes the service-discovery server returns
//! - The loader that turns a JSON targets file into target groups

pub mod domain;
pub mod dto;
pub mod error;
pub mod loader;

pub use domain::target_group::{Labels, TargetGroup, TargetGroups};
pub use error::{LoadError, SchemaError};
pub use loader::{load_target_groups, parse_target_groups};
