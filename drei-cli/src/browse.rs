//! Interactive quiz screen for the terminal.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use drei_lib::{
    QuizId, Repository,
    screen::{QuizScreen, SortColumn},
};

use crate::{
    dialogs::{TerminalDialogs, TerminalNavigator},
    quiz::print_table,
};

/// Render the visible list, then read one command per line until the user
/// navigates back.
pub fn run(repo: &Repository) -> Result<()> {
    let mut screen = QuizScreen::new(repo.clone())?;
    let mut dialogs = TerminalDialogs::new();
    let mut navigator = TerminalNavigator;

    print_help();

    loop {
        println!();
        print_table(&screen);
        if !screen.search().is_empty() {
            println!("{} {}", "search:".dimmed(), screen.search());
        }

        print!("{} ", ">".bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        // A leading slash updates the live search; a bare slash clears it
        if let Some(rest) = line.strip_prefix('/') {
            screen.set_search(rest.to_string());
            continue;
        }

        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (None, _) => {}
            (Some("help"), _) => print_help(),
            (Some("back"), _) | (Some("quit"), _) => break,
            (Some("add"), _) => screen.add_quiz(&mut dialogs)?,
            (Some("sort"), Some(column)) => match parse_column(column) {
                Some(column) => screen.toggle_sort(column),
                None => println!("{}", "unknown column (number, name, category)".red()),
            },
            (Some("edit"), Some(id)) => match parse_id(id) {
                Some(id) => screen.edit_quiz(&mut dialogs, id)?,
                None => println!("{}", "invalid id".red()),
            },
            (Some("del"), Some(id)) => match parse_id(id) {
                Some(id) => screen.delete_quiz(&mut dialogs, id)?,
                None => println!("{}", "invalid id".red()),
            },
            (Some("questions"), Some(id)) => match parse_id(id) {
                Some(id) => screen.manage_questions(&mut dialogs, &mut navigator, id)?,
                None => println!("{}", "invalid id".red()),
            },
            _ => println!("{}", "unknown command, try `help`".red()),
        }
    }

    screen.back_to_main(&mut navigator)?;

    Ok(())
}

fn parse_id(text: &str) -> Option<QuizId> {
    text.parse::<u64>().ok().map(QuizId::from)
}

fn parse_column(text: &str) -> Option<SortColumn> {
    match text {
        "number" => Some(SortColumn::Number),
        "name" => Some(SortColumn::Name),
        "category" => Some(SortColumn::Category),
        _ => None,
    }
}

fn print_help() {
    println!(
        "{}",
        "commands: /TEXT search, sort COLUMN, add, edit ID, del ID, questions ID, back".dimmed()
    );
}
