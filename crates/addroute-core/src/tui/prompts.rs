//! Interactive scaffold flow using cliclack

use crate::config::Settings;
use crate::routes::{example, render_router, validate_name, RouteSpec};
use crate::runtime::check::{self, MIN_PRISMA_VERSION, PRISMA};
use crate::scaffold;
use anyhow::Result;

/// CLI arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Resource name to use without prompting
    pub name: Option<String>,

    /// Gate the routes behind the token-verification middleware
    pub protected: bool,

    /// Skip the Prisma CLI check
    pub skip_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Run one end-to-end scaffold operation with interactive prompts
pub async fn run(settings: &Settings, args: AddArgs) -> Result<()> {
    cliclack::intro("addroute")?;

    // Step 1: Check the Prisma CLI (advisory, skippable)
    if args.skip_check {
        cliclack::log::info("Skipping Prisma CLI check")?;
    } else {
        handle_prereq_check(&args)?;
    }

    // Step 2: Collect the route spec
    let spec = collect_spec(&args)?;

    // Step 3: Render and write
    let root = std::env::current_dir()?;
    let path = scaffold::router_path(&root, settings, &spec);
    let content = render_router(&spec, settings);

    let spinner = cliclack::spinner();
    spinner.start("Creating route...");
    scaffold::write_file(&path, &content).await?;
    spinner.stop(format!(
        "Route {} created at {}",
        spec.name(),
        path.display()
    ));

    cliclack::outro("Happy coding!")?;

    Ok(())
}

/// Write the example authentication router into the routes directory
pub async fn run_example(settings: &Settings) -> Result<()> {
    cliclack::intro("addroute")?;

    let root = std::env::current_dir()?;
    let path = root
        .join(&settings.routes_dir)
        .join(example::EXAMPLE_ROUTER_FILE);

    let spinner = cliclack::spinner();
    spinner.start("Writing example router...");
    scaffold::write_file(&path, example::EXAMPLE_ROUTER).await?;
    spinner.stop(format!("Example router created at {}", path.display()));

    cliclack::outro("Register, login, and verify are ready to explore.")?;

    Ok(())
}

fn handle_prereq_check(args: &AddArgs) -> Result<()> {
    let info = check::check_prisma();

    if info.available {
        let version = info.version.as_deref().unwrap_or("unknown");
        cliclack::log::success(format!("{} installed ({})", PRISMA.display_name, version))?;
        if let Some(warning) = check::version_advisory(version, MIN_PRISMA_VERSION) {
            cliclack::log::warning(warning.lines().next().unwrap_or(&warning))?;
        }
        return Ok(());
    }

    cliclack::log::warning(format!("{} is not installed", PRISMA.display_name))?;

    // In non-interactive mode, just continue
    if args.yes {
        cliclack::log::info(format!(
            "Continuing without {} (--yes mode)",
            PRISMA.display_name
        ))?;
        return Ok(());
    }

    let action: &str = cliclack::select("What would you like to do?")
        .item(
            "skip",
            format!("Skip and continue without {}", PRISMA.display_name),
            "",
        )
        .item(
            "docs",
            format!("Open documentation ({})", PRISMA.docs_url),
            "",
        )
        .interact()?;

    match action {
        "docs" => {
            check::open_docs()?;
            cliclack::outro(format!(
                "Install it with `{}`, then run this command again.",
                PRISMA.install_command
            ))?;
            std::process::exit(0);
        }
        _ => {
            cliclack::log::info(format!(
                "Continuing without {}. Install it with `{}`.",
                PRISMA.display_name, PRISMA.install_command
            ))?;
        }
    }

    Ok(())
}

fn collect_spec(args: &AddArgs) -> Result<RouteSpec> {
    let name: String = match &args.name {
        Some(name) => name.clone(),
        None => cliclack::input("Enter the name for the new route:")
            .placeholder("widget")
            .validate(|input: &String| validate_name(input).map_err(|e| e.to_string()))
            .interact()?,
    };

    let protected = if args.protected || args.yes {
        args.protected
    } else {
        cliclack::confirm("Should this route be protected?")
            .initial_value(false)
            .interact()?
    };

    Ok(RouteSpec::new(name, protected)?)
}
