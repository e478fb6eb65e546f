//! addroute CLI - Express route scaffolding

use addroute_core::config::Settings;
use addroute_core::runtime::{check, script};
use addroute_core::tui::AddArgs;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addroute")]
#[command(about = "Scaffold Express CRUD routers with optional token protection")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a new CRUD router
    Add(CliAddArgs),
    /// Write the example authentication router (register/login/verify)
    Example,
    /// Check that the Prisma CLI is installed
    Check,
    /// Run the companion add_route.sh script
    Script(ScriptArgs),
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Resource name for the new route
    #[arg(short, long)]
    pub name: Option<String>,

    /// Gate the routes behind the token-verification middleware
    #[arg(short, long)]
    pub protected: bool,

    /// Skip the Prisma CLI check
    #[arg(long = "skip-check")]
    pub skip_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            name: args.name,
            protected: args.protected,
            skip_check: args.skip_check,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ScriptArgs {
    /// Path to the script (defaults to add_route.sh next to the executable)
    #[arg(long)]
    pub script: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let settings = Settings::load(&std::env::current_dir()?)?;

    match args.command {
        Some(Command::Add(add_args)) => {
            let result = addroute_core::tui::run(&settings, add_args.into()).await;

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Example) => {
            let result = addroute_core::tui::run_example(&settings).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
        Some(Command::Check) => {
            check::report();
            Ok(())
        }
        Some(Command::Script(script_args)) => script::run_script(script_args.script).await,
        None => {
            // No subcommand provided, default to the interactive add flow
            let result = addroute_core::tui::run(&settings, AddArgs::default()).await;

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
