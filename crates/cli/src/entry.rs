//! One builder per record kind: prompt for the fields, then append.

use crate::prompt::{PromptError, Prompter};
use anyhow::{Context, Result};
use content_core::collection::{self, Appended};
use content_core::models::{Article, Book, Category, Link, Project, Record, Visibility};
use std::io::{BufRead, Write};
use storage::DataDir;
use tracing::debug;

pub const VISIBILITY_MESSAGE: &str = "Visibility must be 'public' or 'private'";

pub fn add<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    dir: &DataDir,
    category: Category,
) -> Result<Appended> {
    match category {
        Category::Book => {
            p.say("\n--- Add Book ---")?;
            let book = capture_book(p)?;
            store(p, dir, &book)
        }
        Category::Project => {
            p.say("\n--- Add Project ---")?;
            let project = capture_project(p)?;
            store(p, dir, &project)
        }
        Category::Article => {
            p.say("\n--- Add Article ---")?;
            let article = capture_article(p)?;
            store(p, dir, &article)
        }
        Category::Link => {
            p.say("\n--- Add Link to Vault ---")?;
            let link = capture_link(p)?;
            store(p, dir, &link)
        }
    }
}

pub fn capture_book<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Book, PromptError> {
    let title = p.ask("Title", true)?;
    let author = p.ask("Author", true)?;
    let status = p.ask("Status (Read/Reading/Want to Read/Owned)", true)?;
    let format = p.ask("Format (Digital/Hard Copy)", true)?;
    let visibility: Visibility = p.ask_parsed("Visibility (public/private)", VISIBILITY_MESSAGE)?;
    let link = p.ask_optional("Link (optional)")?;
    let isbn = p.ask_optional("ISBN (optional)")?;
    Ok(Book {
        title,
        author,
        status,
        format,
        visibility,
        link,
        isbn,
    })
}

pub fn capture_project<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Project, PromptError> {
    let title = p.ask("Title", true)?;
    let description = p.ask("Description", true)?;
    let tech = p.ask_list("Technologies (comma separated)")?;
    let kind = p.ask("Type (project/exploration)", true)?.to_lowercase();
    let repo_url = p.ask("GitHub Repo URL (optional)", false)?;
    let demo_url = p.ask("Demo URL (optional)", false)?;
    Ok(Project {
        title,
        description,
        tech,
        kind,
        repo_url,
        demo_url,
    })
}

pub fn capture_article<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
) -> Result<Article, PromptError> {
    Ok(Article {
        title: p.ask("Title", true)?,
        url: p.ask("URL", true)?,
        notes: p.ask("Notes", true)?,
        tags: p.ask_list("Tags (comma separated)")?,
    })
}

pub fn capture_link<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Link, PromptError> {
    Ok(Link {
        title: p.ask("Title", true)?,
        url: p.ask("URL", true)?,
        category: p.ask("Category", true)?,
    })
}

fn store<T: Record, R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    dir: &DataDir,
    record: &T,
) -> Result<Appended> {
    let appended = collection::append(dir, record)
        .with_context(|| format!("saving {} record", T::CATEGORY))?;
    debug!("{} records in {}", appended.len, appended.path.display());
    p.say(&format!("Successfully saved to {}", appended.file_name))?;
    Ok(appended)
}
