//! Operator interaction seam
//!
//! The creation flow never talks to the terminal directly. It asks a [`Prompter`] for
//! answers and reports progress through it, so the same flow drives the cliclack UI,
//! a silent programmatic run, and scripted tests.

use anyhow::Result;

/// Outcome of a single prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Proceed(T),
    Cancelled,
}

impl<T> Prompt<T> {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Prompt::Cancelled)
    }
}

/// Unwrap a `Prompt`, returning `Prompt::Cancelled` from the enclosing function on cancel.
#[macro_export]
macro_rules! proceed {
    ($prompt:expr) => {
        match $prompt {
            $crate::prompt::Prompt::Proceed(value) => value,
            $crate::prompt::Prompt::Cancelled => return Ok($crate::prompt::Prompt::Cancelled),
        }
    };
}

/// Asks questions and shows progress
///
/// Reporting methods default to `tracing`, which is all a non-interactive caller needs.
pub trait Prompter {
    /// Yes/no question
    fn confirm(&mut self, message: &str, initial: bool) -> Result<Prompt<bool>>;

    /// Free text question; an empty answer yields `default`
    fn text(&mut self, message: &str, placeholder: &str, default: &str) -> Result<Prompt<String>>;

    fn info(&mut self, message: &str) -> Result<()> {
        tracing::info!("{message}");
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        tracing::warn!("{message}");
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        tracing::error!("{message}");
        Ok(())
    }

    /// Begin a long-running step (a spinner in the terminal UI)
    fn start_step(&mut self, message: &str) {
        tracing::debug!("{message}");
    }

    /// Finish the step begun by [`Prompter::start_step`]
    fn finish_step(&mut self, message: &str) {
        tracing::debug!("{message}");
    }

    /// Abandon the step begun by [`Prompter::start_step`]
    fn fail_step(&mut self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Prompter for programmatic runs: it never asks anything
///
/// Every question resolves to its default; reports go to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Prompter for Silent {
    fn confirm(&mut self, _message: &str, initial: bool) -> Result<Prompt<bool>> {
        Ok(Prompt::Proceed(initial))
    }

    fn text(&mut self, _message: &str, _placeholder: &str, default: &str) -> Result<Prompt<String>> {
        Ok(Prompt::Proceed(default.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_takes_defaults() {
        let mut silent = Silent;
        assert_eq!(silent.confirm("?", true).unwrap(), Prompt::Proceed(true));
        assert_eq!(
            silent.text("?", "x", "new-app").unwrap(),
            Prompt::Proceed("new-app".to_string())
        );
    }
}
