//! # ruten-std
//!
//! Standard implementations for the Ruten HTTP dispatch engine.
//!
//! This crate provides:
//! - **Dispatch engine**: [`dispatch::DispatchEngine`]
//! - **Route collection**: [`collection::RegexCollection`], [`collection::CollectionBuilder`]
//! - **Execution strategies**: [`strategy::ControllerStrategy`]
//! - **Action resolution**: [`resolver::resolve`]
//! - **Fallback scan**: [`fallback::allowed_methods`]
//! - **Testing**: [`testing::RecordingStrategy`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use ruten_core;

// Modules
pub mod collection;
pub mod dispatch;
pub mod fallback;
pub mod resolver;
pub mod strategy;
pub mod testing;
pub mod uri;
