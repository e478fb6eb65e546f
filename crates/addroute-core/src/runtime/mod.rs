//! Prerequisite detection and delegated script execution
//!
//! This module provides:
//! - Prisma CLI detection with a semver minimum-version advisory
//! - Execution of the companion `add_route.sh` script

pub mod check;
pub mod script;

pub use check::{check_prisma, version_advisory, ToolConfig, ToolInfo, PRISMA};
pub use script::run_script;
