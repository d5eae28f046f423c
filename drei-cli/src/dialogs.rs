//! Terminal renditions of the screen's dialog and navigation ports.

use std::{
    io::{self, BufRead, Write},
    process,
};

use anyhow::Context;
use colored::Colorize;
use drei_lib::{
    Quiz,
    screen::{Dialogs, Navigator, QuizForm},
};

/// Form fields already supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct ArgForm {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Line-oriented prompt rendition of the modal dialog surface.
///
/// Each missing field is prompted for on its own line; reaching end of input
/// (ctrl-d) cancels the whole form. When editing, an empty answer keeps the
/// value shown in brackets.
pub struct TerminalDialogs {
    args: ArgForm,
    assume_yes: bool,
}

impl TerminalDialogs {
    pub fn new() -> Self {
        Self {
            args: ArgForm::default(),
            assume_yes: false,
        }
    }

    pub fn with_args(args: ArgForm) -> Self {
        Self {
            args,
            assume_yes: false,
        }
    }

    /// A surface whose delete confirmation was already given (`--yes`).
    pub fn confirmed() -> Self {
        Self {
            args: ArgForm::default(),
            assume_yes: true,
        }
    }

    fn prompt(&self, label: &str, current: Option<&str>) -> Option<String> {
        match current {
            Some(value) => print!("{} [{value}]: ", label.bold()),
            None => print!("{}: ", label.bold()),
        }
        io::stdout().flush().ok()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).ok()? == 0 {
            // EOF cancels the dialog
            println!();
            return None;
        }

        let input = line.trim_end_matches(['\r', '\n']).to_string();
        match current {
            // An empty answer keeps the current value when editing
            Some(value) if input.is_empty() => Some(value.to_string()),
            _ => Some(input),
        }
    }
}

impl Dialogs for TerminalDialogs {
    fn quiz_form(&mut self, existing: Option<&Quiz>) -> Option<QuizForm> {
        let name = match self.args.name.take() {
            Some(name) => name,
            None => self.prompt("Quiz name", existing.map(|quiz| quiz.name().as_str()))?,
        };
        let category = match self.args.category.take() {
            Some(category) => category,
            None => self.prompt("Category", existing.map(|quiz| quiz.category().as_str()))?,
        };

        Some(QuizForm { name, category })
    }

    fn confirm_delete(&mut self, quiz: &Quiz) -> bool {
        if self.assume_yes {
            return true;
        }

        println!("Are you sure you want to delete \"{quiz}\"? This action cannot be undone.");
        print!("{} ", "Delete? [y/N]:".bold());
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).unwrap_or(0) == 0 {
            println!();
            return false;
        }

        matches!(line.trim(), "y" | "Y" | "yes")
    }

    fn notify(&mut self, title: &str, message: &str) {
        eprintln!("{} {message}", format!("{title}:").red().bold());
    }
}

impl Default for TerminalDialogs {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands cross-screen navigation to external processes.
///
/// Question management lives in the companion `drei-questions` tool; the
/// quiz id is passed on its command line.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn open_question_manager(&mut self, quiz: &Quiz) -> anyhow::Result<()> {
        let status = process::Command::new("drei-questions")
            .arg(quiz.id().to_string())
            .status()
            .context("failed to launch drei-questions")?;

        if !status.success() {
            anyhow::bail!("drei-questions exited with {status}");
        }

        Ok(())
    }

    fn return_to_main(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
