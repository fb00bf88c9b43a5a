use crate::entry;
use crate::prompt::{PromptError, Prompter};
use anyhow::Result;
use content_core::models::Category;
use std::io::{BufRead, Write};
use storage::DataDir;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add(Category),
    Exit,
}

impl MenuChoice {
    /// Surrounding whitespace is ignored, so `" 4 "` selects Add Link.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add(Category::Book)),
            "2" => Some(MenuChoice::Add(Category::Project)),
            "3" => Some(MenuChoice::Add(Category::Article)),
            "4" => Some(MenuChoice::Add(Category::Link)),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated,
}

/// Shows the menu until Exit is chosen or input runs out.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>, dir: &DataDir) -> Result<()> {
    let mut state = State::Running;
    while state == State::Running {
        state = step(p, dir)?;
    }
    Ok(())
}

/// One pass: print the menu, read a choice, run it.
pub fn step<R: BufRead, W: Write>(p: &mut Prompter<R, W>, dir: &DataDir) -> Result<State> {
    p.say("\n=== Content Manager ===")?;
    p.say("1. Add Book")?;
    p.say("2. Add Project")?;
    p.say("3. Add Article")?;
    p.say("4. Add Link")?;
    p.say("5. Exit")?;
    let line = match p.read_line("Select an option: ") {
        Ok(line) => line,
        Err(PromptError::Closed) => {
            debug!("input closed at menu");
            return Ok(State::Terminated);
        }
        Err(e) => return Err(e.into()),
    };
    match MenuChoice::parse(&line) {
        Some(MenuChoice::Add(category)) => {
            entry::add(p, dir, category)?;
            Ok(State::Running)
        }
        Some(MenuChoice::Exit) => Ok(State::Terminated),
        None => {
            p.say("Invalid option.")?;
            Ok(State::Running)
        }
    }
}
