//! Addroute Core - Shared library for Express route scaffolding
//!
//! This library provides the core functionality for scaffolding boilerplate
//! Express routers: prompt for a resource name and a protection flag, render
//! a four-endpoint CRUD router, and write it into the project's routes
//! directory.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for route definitions and
//!   rendering, plus the file writer
//! - **Layer 2: Runtime Support** - Prisma CLI detection and delegated script
//!   execution
//! - **Layer 3: CLI/TUI Interface** - cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use addroute_core::{render_router, RouteSpec, Settings};
//!
//! let settings = Settings::default();
//! let spec = RouteSpec::new("widget", true)?;
//! let content = render_router(&spec, &settings);
//! ```

pub mod config;
pub mod routes;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Settings;
pub use routes::{crud_routes, render_router, NameError, RouteDef, RouteSpec};
pub use scaffold::{router_path, write_file};

#[cfg(feature = "tui")]
pub use tui::run;
