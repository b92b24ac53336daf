//! Core domain types
//!
//! Structures describing what the populator registers: named target groups,
//! each with a list of hosts and a set of labels.

pub mod target_group;
