//! Charm-style CLI prompts using cliclack

use crate::options::CreateArgs;
use crate::product::ProductConfig;
use crate::prompt::{Prompt, Prompter};
use crate::runtime::tool::{ToolConfig, ToolManager};
use crate::runtime::TokioRunner;
use crate::scaffold::{Outcome, Scaffolder};
use crate::templates::TemplateSource;
use anyhow::Result;
use colored::Colorize;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

/// Set while a prompt is reading keys
static PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

/// For the binary's Ctrl+C handler: `true` when the interrupt belongs to a prompt.
///
/// The terminal backend raises SIGINT itself when Ctrl+C is read inside a prompt and
/// then returns an interrupted error, which the prompt turns into a cancellation. The
/// handler must not exit the process in that case.
pub fn claim_interrupt() -> bool {
    PROMPT_ACTIVE.swap(false, Ordering::SeqCst)
}

/// Run one cliclack interaction with the interrupt latch armed
fn interact<T>(read: impl FnOnce() -> io::Result<T>) -> Result<Prompt<T>> {
    PROMPT_ACTIVE.store(true, Ordering::SeqCst);
    let result = read();
    // An interrupt stays latched: the signal handler thread may only claim it after `read` returns
    if !matches!(&result, Err(e) if e.kind() == io::ErrorKind::Interrupted) {
        PROMPT_ACTIVE.store(false, Ordering::SeqCst);
    }
    answer(result)
}

/// Map cliclack's interrupt (Esc / Ctrl+C inside a prompt) to a cancellation
fn answer<T>(result: io::Result<T>) -> Result<Prompt<T>> {
    match result {
        Ok(value) => Ok(Prompt::Proceed(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(Prompt::Cancelled),
        Err(e) => Err(e.into()),
    }
}

/// [`Prompter`] rendering through cliclack
#[derive(Default)]
pub struct ClackPrompter {
    spinner: Option<cliclack::ProgressBar>,
}

impl Prompter for ClackPrompter {
    fn confirm(&mut self, message: &str, initial: bool) -> Result<Prompt<bool>> {
        interact(|| cliclack::confirm(message).initial_value(initial).interact())
    }

    fn text(&mut self, message: &str, placeholder: &str, default: &str) -> Result<Prompt<String>> {
        interact(|| {
            cliclack::input(message)
                .placeholder(placeholder)
                .default_input(default)
                .interact()
        })
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }

    fn start_step(&mut self, message: &str) {
        let spinner = cliclack::spinner();
        spinner.start(message);
        self.spinner = Some(spinner);
    }

    fn finish_step(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop(message);
        }
    }

    fn fail_step(&mut self, message: &str) {
        if let Some(spinner) = self.spinner.take() {
            spinner.error(message);
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.intro().black().on_yellow().to_string())?;

    // Step 1: Make sure the package manager is there before asking anything
    if !handle_tool_check(config, &args)? {
        cliclack::outro_cancel("Operation cancelled.")?;
        return Ok(());
    }

    // Step 2: Setup template source
    let source = TemplateSource::resolve(config, args.template_dir.as_deref());
    if let TemplateSource::Local(path) = &source {
        cliclack::log::info(format!("Using local template from {}", path.display()))?;
    }

    // Step 3: Create the project
    let cwd = std::env::current_dir()?;
    let runner = TokioRunner;
    let scaffolder = Scaffolder::new(config, &runner, cwd).with_template(source);
    let mut prompter = ClackPrompter::default();

    match scaffolder.create_interactive(&args, &mut prompter).await? {
        Outcome::Created(project_dir) => print_next_steps(config, &project_dir)?,
        Outcome::Cancelled => cliclack::outro_cancel("Operation cancelled.")?,
    }

    Ok(())
}

/// Returns `false` when the operator backed out
fn handle_tool_check<C: ProductConfig>(config: &C, args: &CreateArgs) -> Result<bool> {
    let tool = ToolManager::new(ToolConfig {
        name: config.installer(),
        display_name: config.installer(),
        docs_url: config.installer_docs_url(),
    });

    if tool.is_installed() {
        let version = tool.get_version().unwrap_or_else(|| "unknown".to_string());
        tracing::debug!(tool = tool.config().name, %version, "package manager found");
        return Ok(true);
    }

    cliclack::log::warning(format!(
        "{} is not installed. {} projects need it to install dependencies.",
        tool.config().display_name,
        config.display_name()
    ))?;

    if !args.yes {
        let open_docs = interact(|| {
            cliclack::confirm("Open the installation instructions in your browser?")
                .initial_value(true)
                .interact()
        });
        match open_docs? {
            Prompt::Proceed(true) => tool.open_docs()?,
            Prompt::Proceed(false) => {}
            Prompt::Cancelled => return Ok(false),
        }
    }

    Err(crate::ScaffoldError::MissingTool {
        tool: tool.config().name,
        docs_url: tool.config().docs_url,
    }
    .into())
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("🚀 Project created successfully! Thank you for your patience.")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_is_cancellation() {
        let interrupted: io::Result<bool> = Err(io::Error::from(io::ErrorKind::Interrupted));
        assert_eq!(answer(interrupted).unwrap(), Prompt::Cancelled);
    }

    #[test]
    fn test_other_io_errors_propagate() {
        let broken: io::Result<bool> = Err(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(answer(broken).is_err());
        assert_eq!(answer(Ok(3)).unwrap(), Prompt::Proceed(3));
    }

    // One test owns the process-wide latch so parallel tests cannot race on it
    #[test]
    fn test_ctrl_c_inside_prompt_is_claimed() {
        let cancelled = interact(|| -> io::Result<bool> {
            // the Ctrl+C handler runs while the prompt is still reading
            assert!(claim_interrupt());
            Err(io::Error::from(io::ErrorKind::Interrupted))
        })
        .unwrap();
        assert_eq!(cancelled, Prompt::Cancelled);
        assert!(!claim_interrupt());

        // handler scheduled only after the prompt returned still finds the latch set
        let late = interact(|| -> io::Result<bool> {
            Err(io::Error::from(io::ErrorKind::Interrupted))
        })
        .unwrap();
        assert_eq!(late, Prompt::Cancelled);
        assert!(claim_interrupt());

        // an answered prompt leaves nothing to claim, so Ctrl+C later exits
        assert_eq!(interact(|| Ok(true)).unwrap(), Prompt::Proceed(true));
        assert!(!claim_interrupt());
    }
}
