//! Task management for Tasktrack.
//!
//! This module implements the task store core: creating validated tasks,
//! retrieving them individually or as a due-date ordered listing, merging
//! partial updates onto stored tasks, and removing them. All reads and
//! mutations pass through the [`services::TaskStore`] service, which owns
//! the collection behind a repository port. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
