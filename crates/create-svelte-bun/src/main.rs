//! create-svelte-bun - Project scaffolding for SvelteKit apps running on Bun

use anyhow::Result;
use clap::Parser;
use scaffolder_core::{CreateArgs, SvelteKitBun};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "create-svelte-bun")]
#[command(about = "Create a new SvelteKit app using Bun")]
#[command(version)]
pub struct Args {
    /// Project directory name
    #[arg(long)]
    pub name: Option<String>,

    /// Set up svelte-check for typechecking
    #[arg(long)]
    pub check: bool,

    /// Set up the Biome linter
    #[arg(long)]
    pub biome: bool,

    /// Use strict TypeScript
    #[arg(long)]
    pub strict: bool,

    /// Say yes to every optional tool without prompting
    #[arg(long = "y", visible_alias = "Y", alias = "yes")]
    pub yes: bool,

    /// Local directory to use as the template instead of the built-in one (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            check: args.check,
            biome: args.biome,
            strict: args.strict,
            yes: args.yes,
            template_dir: args.template_dir,
        }
    }
}

/// Initialize tracing on stderr; prompts own stdout
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully; inside a prompt it cancels instead of exiting
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        if scaffolder_core::tui::claim_interrupt() {
            return;
        }
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing();
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), ?args, "starting");

    let result = scaffolder_core::run(&SvelteKitBun, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let args = Args::try_parse_from([
            "create-svelte-bun",
            "--name",
            "demo-app",
            "--biome",
            "--strict",
        ])
        .unwrap();
        let create: CreateArgs = args.into();
        assert_eq!(create.name.as_deref(), Some("demo-app"));
        assert!(create.biome && create.strict);
        assert!(!create.check && !create.yes);
    }

    #[test]
    fn test_yes_spellings() {
        for flag in ["--y", "--Y", "--yes"] {
            let args = Args::try_parse_from(["create-svelte-bun", flag]).unwrap();
            assert!(args.yes, "{flag} should set yes");
        }
    }

    #[test]
    fn test_no_flags_means_prompt_everything() {
        let args = Args::try_parse_from(["create-svelte-bun"]).unwrap();
        let create: CreateArgs = args.into();
        assert!(create.name.is_none());
        assert!(!create.check && !create.biome && !create.strict && !create.yes);
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
