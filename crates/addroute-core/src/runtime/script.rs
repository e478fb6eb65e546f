//! Delegated execution of the companion `add_route.sh` script
//!
//! Resolves the script next to the running executable, runs it with bash,
//! and relays its output streams. Exit handling aside, nothing flows back
//! to the caller.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Filename of the delegated script
pub const SCRIPT_NAME: &str = "add_route.sh";

/// Resolve the script path relative to the running executable
pub fn default_script_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Executable has no parent directory"))?;
    Ok(dir.join(SCRIPT_NAME))
}

/// Run the script with bash, streaming its stdout and stderr
pub async fn run_script(script: Option<PathBuf>) -> Result<()> {
    let path = match script {
        Some(path) => path,
        None => default_script_path()?,
    };

    if !path.exists() {
        anyhow::bail!("Script not found: {}", path.display());
    }

    println!(
        "{} {}",
        "Running:".dimmed(),
        format!("bash {}", path.display()).yellow()
    );

    let mut child = TokioCommand::new("bash")
        .arg(&path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("Failed to run {}", path.display()))?;

    let stdout = child.stdout.take().context("Failed to capture stdout")?;
    let stderr = child.stderr.take().context("Failed to capture stderr")?;

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    loop {
        tokio::select! {
            line = stdout_reader.next_line() => {
                match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => break,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        break;
                    }
                }
            }
            line = stderr_reader.next_line() => {
                match line {
                    Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                    Ok(None) => {}
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                    }
                }
            }
        }
    }

    let status = child
        .wait()
        .await
        .with_context(|| format!("Failed to wait for {}", path.display()))?;

    if !status.success() {
        anyhow::bail!("Script exited with code: {}", status.code().unwrap_or(-1));
    }

    Ok(())
}
