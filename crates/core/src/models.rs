use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four collections, one JSON file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Book,
    Project,
    Article,
    Link,
}

impl Category {
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Book => "library.json",
            Category::Project => "projects.json",
            Category::Article => "articles.json",
            Category::Link => "links.json",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Book => "book",
            Category::Project => "project",
            Category::Article => "article",
            Category::Link => "link",
        };
        f.write_str(s)
    }
}

/// A record that belongs to exactly one collection.
pub trait Record: Serialize {
    const CATEGORY: Category;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Error)]
#[error("visibility must be 'public' or 'private', got {0:?}")]
pub struct UnknownVisibility(pub String);

impl FromStr for Visibility {
    type Err = UnknownVisibility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            _ => Err(UnknownVisibility(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub status: String,
    pub format: String,
    pub visibility: Visibility,
    /// Omitted from the stored object when blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

impl Record for Book {
    const CATEGORY: Category = Category::Book;
}

/// `repo_url` and `demo_url` are always written, even when empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "repoUrl")]
    pub repo_url: String,
    #[serde(rename = "demoUrl")]
    pub demo_url: String,
}

impl Record for Project {
    const CATEGORY: Category = Category::Project;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub notes: String,
    pub tags: Vec<String>,
}

impl Record for Article {
    const CATEGORY: Category = Category::Article;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
    pub category: String,
}

impl Record for Link {
    const CATEGORY: Category = Category::Link;
}

/// Splits on `,` and trims each piece. Empty pieces are kept.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// `None` for blank input, otherwise the trimmed value.
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
