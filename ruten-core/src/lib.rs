//! # ruten-core
//!
//! Core types and traits for the Ruten HTTP dispatch engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! collection backends and strategies that don't need the full `ruten-std`
//! implementation.
//!
//! # Three-Component Architecture
//!
//! Dispatch is split across three components with explicit seams:
//!
//! ## Route Collection ([`RouteCollection`])
//!
//! Read-only route storage, built once before dispatch begins. Per method it
//! holds a static table (exact path → action) and an ordered sequence of
//! compiled dynamic entries ([`DynamicEntry`]): combined alternation
//! patterns whose alternatives are told apart by how many capture groups a
//! match produces.
//!
//! ## Dispatch Engine (`ruten-std`)
//!
//! The orchestration core: canonicalizes the method, normalizes the URI,
//! tries static then dynamic resolution, and on a miss runs a cross-method
//! scan to distinguish "no such resource" from "wrong method". Pure
//! computation over the collection; its only observable effect is the one
//! delegated strategy call.
//!
//! ## Execution Strategy ([`ExecutionStrategy`])
//!
//! The invocation seam. Receives the resolved [`Action`] and the captured
//! [`RouteParams`]; the engine never inspects what invocation returns.
//!
//! # Error Types
//!
//! [`RouteError`] is the complete routing taxonomy: unsupported method,
//! malformed URI, not found, and method-not-allowed with the ordered set of
//! methods that would have matched.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod action;
mod collection;
mod error;
mod method;
mod params;
mod route;
mod strategy;

// Re-exports
pub use action::{Action, HandlerFn};
pub use collection::RouteCollection;
pub use error::RouteError;
pub use method::{HttpMethod, METHODS};
pub use params::RouteParams;
pub use route::{DynamicEntry, RouteMatch, RouteTarget};
pub use strategy::ExecutionStrategy;
