//! Common configuration and data helpers shared by the benchmark modules.

#![allow(dead_code)] // benchmark use doesn't count as "usage" for linting

pub mod config;
pub mod data;
