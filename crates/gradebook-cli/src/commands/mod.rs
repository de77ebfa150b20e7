//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod add_discipline;
pub mod add_student;
pub mod average;
pub mod export;
pub mod grade;
pub mod import;
pub mod remove_discipline;
pub mod remove_student;
pub mod show;
