use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use drei_lib::{
    QuizId, Repository,
    screen::{QuizScreen, SortColumn, SortDirection, SortState},
};

use crate::dialogs::{ArgForm, TerminalDialogs, TerminalNavigator};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List quizzes
    List {
        /// Only show quizzes whose name or category contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sort the table by this column
        #[arg(short = 'o', long, value_enum)]
        sort: Option<ColumnArg>,
        /// Sort in descending order
        #[arg(short, long, requires = "sort")]
        desc: bool,
    },
    /// Add a new quiz; missing fields are prompted for
    Add {
        name: Option<String>,
        category: Option<String>,
    },
    /// Edit a quiz
    Edit { id: u64 },
    /// Delete a quiz
    Delete {
        id: u64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Open the question manager for a quiz
    Questions { id: u64 },
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum ColumnArg {
    Number,
    Name,
    Category,
}

impl From<ColumnArg> for SortColumn {
    fn from(arg: ColumnArg) -> Self {
        match arg {
            ColumnArg::Number => SortColumn::Number,
            ColumnArg::Name => SortColumn::Name,
            ColumnArg::Category => SortColumn::Category,
        }
    }
}

pub fn handle(repo: &Repository, cmd: &Command) -> Result<()> {
    let mut screen = QuizScreen::new(repo.clone())?;

    match cmd {
        Command::List { search, sort, desc } => {
            if let Some(text) = search {
                screen.set_search(text.clone());
            }
            if let Some(column) = sort {
                let direction = if *desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                screen.set_sort(Some(SortState {
                    column: (*column).into(),
                    direction,
                }));
            }

            print_table(&screen);
        }
        Command::Add { name, category } => {
            let mut dialogs = TerminalDialogs::with_args(ArgForm {
                name: name.clone(),
                category: category.clone(),
            });
            screen.add_quiz(&mut dialogs)?;
        }
        Command::Edit { id } => {
            let mut dialogs = TerminalDialogs::new();
            screen.edit_quiz(&mut dialogs, QuizId::from(*id))?;
        }
        Command::Delete { id, yes } => {
            let mut dialogs = if *yes {
                TerminalDialogs::confirmed()
            } else {
                TerminalDialogs::new()
            };
            screen.delete_quiz(&mut dialogs, QuizId::from(*id))?;
        }
        Command::Questions { id } => {
            let mut dialogs = TerminalDialogs::new();
            let mut navigator = TerminalNavigator;
            screen.manage_questions(&mut dialogs, &mut navigator, QuizId::from(*id))?;
        }
    }

    Ok(())
}

/// Render the screen's visible view as a three-column table, with the
/// internal id for addressing rows from the command line.
pub fn print_table(screen: &QuizScreen) {
    let header = format!("{:>6}  {:>6}  {:<32}  {}", "id", "#", "Name", "Category");
    println!("{}", header.bold());

    for quiz in screen.visible() {
        println!(
            "{:>6}  {:>6}  {:<32}  {}",
            quiz.id(),
            quiz.number(),
            quiz.name(),
            quiz.category()
        );
    }
}
