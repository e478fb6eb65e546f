//! Prisma CLI detection

use anyhow::Result;
use colored::Colorize;
use semver::Version;
use std::process::Command;

/// Minimum Prisma CLI version the scaffolded routers are known to work with
pub const MIN_PRISMA_VERSION: &str = "2.0.0";

/// Static metadata for an external CLI tool
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g. "prisma")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Command that installs the tool
    pub install_command: &'static str,
    /// URL to the documentation
    pub docs_url: &'static str,
}

/// The Prisma CLI, used by the routers this tool scaffolds
pub const PRISMA: ToolConfig = ToolConfig {
    name: "prisma",
    display_name: "Prisma CLI",
    install_command: "npm install @prisma/cli --save-dev",
    docs_url: "https://www.prisma.io/docs",
};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if the Prisma CLI is available
pub fn check_prisma() -> ToolInfo {
    check_tool(&PRISMA)
}

fn check_tool(config: &ToolConfig) -> ToolInfo {
    let output = Command::new(config.name).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            ToolInfo {
                name: config.display_name,
                version: if version.is_empty() {
                    None
                } else {
                    Some(version)
                },
                available: true,
            }
        }
        _ => ToolInfo {
            name: config.display_name,
            version: None,
            available: false,
        },
    }
}

/// Compare the installed version against the supported minimum.
/// Returns a warning message when the installed CLI is older; versions that
/// do not parse produce no warning.
pub fn version_advisory(installed: &str, minimum: &str) -> Option<String> {
    let installed_ver = parse_version(installed)?;
    let minimum_ver = parse_version(minimum)?;

    if installed_ver < minimum_ver {
        Some(format!(
            "Prisma CLI {} is older than the supported minimum {}.\n\
             Consider updating: {}",
            installed_ver, minimum_ver, PRISMA.install_command
        ))
    } else {
        None
    }
}

/// Extract a semver version from tool output like `prisma/2.28.0 (darwin-x64)`
/// or `v5.1.0`
fn parse_version(raw: &str) -> Option<Version> {
    raw.split(|c: char| c.is_whitespace() || c == '/' || c == ':')
        .filter_map(|token| Version::parse(token.strip_prefix('v').unwrap_or(token)).ok())
        .next()
}

/// Print a standalone prerequisite report, in the shape of the original
/// `checkPrerequisites` script
pub fn report() {
    let info = check_prisma();

    if info.available {
        let version = info.version.as_deref().unwrap_or("unknown");
        println!(
            "{} ({})",
            "Prisma CLI is installed. You are ready to go!".green(),
            version
        );
        if let Some(warning) = version_advisory(version, MIN_PRISMA_VERSION) {
            println!("{} {}", "Warning:".yellow(), warning);
        }
    } else {
        eprintln!(
            "{} Please install it by running `{}`.",
            "Prisma CLI is not installed.".red(),
            PRISMA.install_command
        );
    }
}

/// Open the Prisma documentation in the default browser
pub fn open_docs() -> Result<()> {
    println!(
        "{}",
        format!(
            "Opening {} documentation in your browser...",
            PRISMA.display_name
        )
        .cyan()
    );
    open::that(PRISMA.docs_url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_version() {
        assert_eq!(parse_version("2.28.0"), Version::parse("2.28.0").ok());
    }

    #[test]
    fn test_parse_prefixed_version() {
        assert_eq!(parse_version("v5.1.0"), Version::parse("5.1.0").ok());
    }

    #[test]
    fn test_parse_tool_banner() {
        assert_eq!(
            parse_version("prisma/2.28.0 (darwin-x64) node-v14"),
            Version::parse("2.28.0").ok()
        );
        assert_eq!(
            parse_version("prisma : 5.1.0"),
            Version::parse("5.1.0").ok()
        );
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert_eq!(parse_version("not a version"), None);
        assert_eq!(parse_version(""), None);
    }

    #[test]
    fn test_advisory_for_older_install() {
        let warning = version_advisory("1.9.0", "2.0.0");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains("2.0.0"));
    }

    #[test]
    fn test_no_advisory_when_current() {
        assert!(version_advisory("2.0.0", "2.0.0").is_none());
        assert!(version_advisory("5.1.0", "2.0.0").is_none());
    }

    #[test]
    fn test_no_advisory_for_unparseable_versions() {
        assert!(version_advisory("unknown", "2.0.0").is_none());
    }
}
