//! Route model and router rendering
//!
//! This module provides:
//! - The route spec (resource name + protection flag) with name validation
//! - Structured CRUD route definitions
//! - Rendering of a spec into router source text
//! - The embedded example authentication router

pub mod builder;
pub mod example;
pub mod render;
pub mod spec;

pub use builder::{crud_routes, HttpMethod, RouteAction, RouteDef};
pub use render::render_router;
pub use spec::{validate_name, NameError, RouteSpec};
