//! Tasktrack: in-memory task tracking backend core.
//!
//! This crate provides the service core of a task-tracking backend: entity
//! validation rules, identity and mutation discipline, and due-date ordered
//! retrieval over a single process-scoped collection of tasks. HTTP routing
//! and wire-schema concerns live outside the crate and consume the service
//! through its envelope-wrapped results.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//!
//! # Modules
//!
//! - [`task`]: Task validation, storage, and due-date ordered retrieval

pub mod task;
