//! folio-rs: a small static site generator for a single-page portfolio/CV site
//!
//! The site is described by one structured content document (`content.json`)
//! whose links may be driven by environment variables, plus per-slug JSON
//! post files under `content/posts`. This crate resolves the document once,
//! loads posts on demand and renders both to plain HTML.

pub mod commands;
pub mod content;
pub mod generator;
pub mod helpers;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use content::{EnvSource, PostStore, ProcessEnv, SiteContent, SiteContentSource};

/// Name of the site content document inside the base directory
pub const CONTENT_FILE: &str = "content.json";

/// The main Folio application
///
/// Holds the site content, resolved exactly once at construction. Environment
/// changes after that point are not reflected.
#[derive(Clone, Debug)]
pub struct Folio {
    /// Resolved site content
    pub content: SiteContent,
    /// Base directory
    pub base_dir: PathBuf,
    /// Posts directory
    pub posts_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory, resolving links against
    /// the process environment
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::with_env(base_dir, &ProcessEnv)
    }

    /// Create a new Folio instance with an explicit environment source
    pub fn with_env<P: AsRef<Path>>(base_dir: P, env: &dyn EnvSource) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_path = base_dir.join(CONTENT_FILE);

        let raw = std::fs::read_to_string(&content_path)
            .with_context(|| format!("failed to read {:?}", content_path))?;
        let source: SiteContentSource = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {:?}", content_path))?;
        let content = content::resolve(source, env);

        Ok(Self {
            content,
            posts_dir: base_dir.join("content").join("posts"),
            public_dir: base_dir.join("public"),
            base_dir,
        })
    }

    /// The post repository for this site
    pub fn posts(&self) -> PostStore {
        PostStore::new(&self.posts_dir)
    }

    /// Generate the static site
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Remove the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_folio_resolves_content_once_at_construction() {
        let tmp = TempDir::new().unwrap();
        commands::init::init_site(tmp.path()).unwrap();

        let mut env = HashMap::new();
        env.insert(
            "BLOG_URL".to_string(),
            "https://blog.example.com".to_string(),
        );
        let folio = Folio::with_env(tmp.path(), &env).unwrap();

        for link in &folio.content.navigation.links {
            assert!(!link.href.is_empty());
        }
        // The scaffold's blog link joins its relative path onto BLOG_URL.
        let blog = folio
            .content
            .navigation
            .links
            .iter()
            .find(|l| l.label == "Blog")
            .unwrap();
        assert_eq!(blog.href, "https://blog.example.com/archive");
        assert_eq!(folio.posts_dir, tmp.path().join("content/posts"));
    }

    #[test]
    fn test_missing_content_document_errors() {
        let tmp = TempDir::new().unwrap();
        assert!(Folio::new(tmp.path()).is_err());
    }
}
