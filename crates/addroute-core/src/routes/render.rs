//! Rendering a route spec into Express router source text

use crate::config::Settings;
use crate::routes::builder::{crud_routes, RouteDef};
use crate::routes::spec::RouteSpec;

/// Render the router module for a spec.
///
/// Protection only adds the middleware require line and one token per
/// handler invocation list; everything else is identical between variants.
/// Deterministic and side-effect free.
pub fn render_router(spec: &RouteSpec, settings: &Settings) -> String {
    let middleware = settings.middleware_name();
    let mut out = String::new();

    out.push_str("import express from 'express';\n");
    if spec.is_protected() {
        out.push_str(&format!(
            "const {} = require('{}');\n",
            middleware, settings.middleware_import
        ));
    }
    out.push('\n');
    out.push_str("const router = express.Router();\n");

    for route in crud_routes() {
        out.push('\n');
        out.push_str(&render_handler(&route, spec, middleware));
    }

    out.push('\n');
    out.push_str("export default router;\n");

    out
}

/// Render one handler binding, e.g.
/// `router.post('/', verifyToken, (req, res) => { ... });`
fn render_handler(route: &RouteDef, spec: &RouteSpec, middleware: &str) -> String {
    let guard = if spec.is_protected() {
        format!("{}, ", middleware)
    } else {
        String::new()
    };

    format!(
        "// {}\nrouter.{}('{}', {}(req, res) => {{\n  res.send('{}');\n}});\n",
        route.action.label(),
        route.method.express_name(),
        route.path,
        guard,
        route.action.message(spec.name())
    )
}
