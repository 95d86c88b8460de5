//! # ruten - HTTP Dispatch Engine
//!
//! `ruten` resolves an HTTP method and URI against a registered route set
//! and delegates invocation to a pluggable execution strategy. Static routes
//! are tried first; dynamic routes are compiled into combined alternation
//! patterns disambiguated by capture-group counting; misses are classified
//! precisely as not-found or method-not-allowed.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ruten::{Action, CollectionBuilder, ControllerStrategy, DispatchEngine, HttpMethod};
//!
//! let collection = CollectionBuilder::new()
//!     .route(HttpMethod::Get, "/users", Action::controller("UserController", "index"))?
//!     .route(HttpMethod::Get, "/users/{id}", Action::controller("UserController", "show"))?
//!     .build()?;
//!
//! let strategy = ControllerStrategy::new()
//!     .register("UserController", "index", |_| "all users".to_string())
//!     .register("UserController", "show", |p| format!("user {}", p.get("id").unwrap()));
//!
//! let engine = DispatchEngine::new(collection, strategy);
//! let body = engine.dispatch("GET", "/users/42")??;
//! assert_eq!(body, "user 42");
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use ruten_core::{
    // Actions
    Action,
    // Data model
    DynamicEntry,
    // Strategy trait
    ExecutionStrategy,
    HandlerFn,
    // Methods
    HttpMethod,
    METHODS,
    // Collection trait
    RouteCollection,
    // Error types
    RouteError,
    RouteMatch,
    RouteParams,
    RouteTarget,
};

pub use ruten_std::{
    collection::{BuildError, CollectionBuilder, RegexCollection},
    dispatch::{DispatchEngine, match_dynamic, matched_group_count},
    fallback::allowed_methods,
    resolver::resolve,
    strategy::{ControllerStrategy, InvokeError},
    uri::normalize,
};

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use ruten_std::testing::*;
}

/// Prelude module - common imports for Ruten.
///
/// # Usage
///
/// ```rust,ignore
/// use ruten::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action,
        CollectionBuilder,
        ControllerStrategy,
        DispatchEngine,
        ExecutionStrategy,
        HttpMethod,
        RouteCollection,
        RouteError,
        RouteParams,
    };
}
