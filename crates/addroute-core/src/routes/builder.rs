//! Structured CRUD route definitions
//!
//! The router is modeled as data first (method, path, action) and rendered
//! afterwards, so the protected and unprotected variants share one code path.

use std::fmt;

/// HTTP methods used by the generated router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Express router method name
    pub fn express_name(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.express_name())
    }
}

/// The four CRUD actions the scaffolded router exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAction {
    List,
    Create,
    Update,
    Delete,
}

impl RouteAction {
    /// Comment label placed above the handler binding
    pub fn label(&self) -> &'static str {
        match self {
            RouteAction::List => "List route",
            RouteAction::Create => "Create route",
            RouteAction::Update => "Update route",
            RouteAction::Delete => "Delete route",
        }
    }

    /// Response message for a resource name, e.g. "Creating a new widget..."
    pub fn message(&self, name: &str) -> String {
        match self {
            RouteAction::List => format!("Listing all {}...", name),
            RouteAction::Create => format!("Creating a new {}...", name),
            RouteAction::Update => format!("Updating a {}...", name),
            RouteAction::Delete => format!("Deleting a {}...", name),
        }
    }
}

/// One handler binding in the generated router
#[derive(Debug, Clone, Copy)]
pub struct RouteDef {
    pub action: RouteAction,
    pub method: HttpMethod,
    pub path: &'static str,
}

/// The canonical list/create/update/delete set bound to a base path
pub fn crud_routes() -> [RouteDef; 4] {
    [
        RouteDef {
            action: RouteAction::List,
            method: HttpMethod::Get,
            path: "/",
        },
        RouteDef {
            action: RouteAction::Create,
            method: HttpMethod::Post,
            path: "/",
        },
        RouteDef {
            action: RouteAction::Update,
            method: HttpMethod::Put,
            path: "/:id",
        },
        RouteDef {
            action: RouteAction::Delete,
            method: HttpMethod::Delete,
            path: "/:id",
        },
    ]
}
