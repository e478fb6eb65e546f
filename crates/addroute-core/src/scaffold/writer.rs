//! Target-path computation and file writing

use crate::config::Settings;
use crate::routes::RouteSpec;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Compute the deterministic target path for a spec:
/// `<root>/<routes_dir>/<name>Router.<extension>`
pub fn router_path(root: &Path, settings: &Settings, spec: &RouteSpec) -> PathBuf {
    root.join(&settings.routes_dir)
        .join(format!("{}.{}", spec.router_stem(), settings.extension))
}

/// Write `content` to `path`, creating missing parent directories.
///
/// An existing file is replaced wholesale. A failed write may leave newly
/// created directories behind; nothing is cleaned up.
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("addroute-writer-{}-{}", tag, std::process::id()))
    }

    #[test]
    fn test_router_path_layout() {
        let spec = RouteSpec::new("widget", false).unwrap();
        let path = router_path(Path::new("/project"), &Settings::default(), &spec);
        assert_eq!(path, Path::new("/project/src/routes/widgetRouter.js"));
    }

    #[test]
    fn test_router_path_honors_settings() {
        let settings = Settings {
            routes_dir: "app/routers".to_string(),
            extension: "ts".to_string(),
            ..Settings::default()
        };
        let spec = RouteSpec::new("user_profile", true).unwrap();
        let path = router_path(Path::new("/project"), &settings, &spec);
        assert_eq!(path, Path::new("/project/app/routers/user_profileRouter.ts"));
    }

    #[tokio::test]
    async fn test_write_creates_missing_directories() {
        let root = temp_root("create");
        let path = root.join("src/routes/widgetRouter.js");

        write_file(&path, "export default router;\n").await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "export default router;\n");

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_scaffold_end_to_end() {
        use crate::routes::render_router;

        let root = temp_root("e2e");
        let settings = Settings::default();
        let spec = RouteSpec::new("widget", false).unwrap();

        let path = router_path(&root, &settings, &spec);
        write_file(&path, &render_router(&spec, &settings))
            .await
            .unwrap();

        assert!(path.ends_with("src/routes/widgetRouter.js"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Creating a new widget..."));
        assert!(!written.contains("verifyToken"));

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[tokio::test]
    async fn test_second_write_replaces_content() {
        let root = temp_root("overwrite");
        let path = root.join("src/routes/widgetRouter.js");

        write_file(&path, "first version, much longer than the second\n")
            .await
            .unwrap();
        write_file(&path, "second\n").await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "second\n");

        std::fs::remove_dir_all(&root).unwrap();
    }
}
