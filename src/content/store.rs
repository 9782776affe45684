//! Post repository - file-based storage for post content
//!
//! Posts live as `<slug>.json` files in a fixed directory (conventionally
//! `content/posts`). Listing and loading are independent reads with no
//! caching; a failed read is recovered locally, never raised to the caller.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// File extension of stored posts
pub const POST_EXT: &str = "json";

/// Icon tag on a post heading link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLinkIcon {
    Paper,
    Github,
    External,
    Dog,
    Linkedin,
}

/// An external link shown under a post heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingLink {
    pub label: String,
    pub href: String,
    pub icon: Option<HeadingLinkIcon>,
}

/// A highlighted pull-out block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: Option<String>,
    pub text: String,
}

/// A body section of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSection {
    pub heading: String,
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// A quote with optional attribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub attribution: Option<String>,
}

/// A closing call-to-action block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCta {
    pub title: String,
    pub body: String,
    pub action_label: Option<String>,
    pub action_href: Option<String>,
}

/// A post as stored on disk
///
/// No validation beyond structural parsing; optional fields stay optional and
/// the presentation layer renders them only when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub subtitle: Option<String>,
    /// Free-form display string, never parsed
    pub date: String,
    pub reading_time: Option<String>,
    #[serde(default)]
    pub heading_links: Vec<HeadingLink>,
    pub intro: Vec<String>,
    pub highlight: Option<Highlight>,
    pub sections: Vec<PostSection>,
    pub quote: Option<Quote>,
    pub cta: Option<PostCta>,
}

/// Why a post could not be listed or loaded
#[derive(Debug, Error)]
pub enum PostError {
    #[error("post \"{slug}\" not found")]
    NotFound { slug: String },

    #[error("failed to read posts directory {dir:?}: {source}")]
    DirUnreadable { dir: PathBuf, source: io::Error },

    #[error("failed to read post \"{slug}\": {source}")]
    Unreadable { slug: String, source: io::Error },

    #[error("failed to parse post \"{slug}\": {source}")]
    Malformed {
        slug: String,
        source: serde_json::Error,
    },
}

/// File-based post repository
pub struct PostStore {
    dir: PathBuf,
}

impl PostStore {
    /// Create a store over the given posts directory
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// The posts directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a slug
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", slug, POST_EXT))
    }

    /// List available slugs, in directory order
    ///
    /// Entries are matched by extension only; the extension is stripped.
    pub async fn try_list_slugs(&self) -> Result<Vec<String>, PostError> {
        let map_err = |source| PostError::DirUnreadable {
            dir: self.dir.clone(),
            source,
        };

        let suffix = format!(".{}", POST_EXT);
        let mut entries = fs::read_dir(&self.dir).await.map_err(map_err)?;
        let mut slugs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(map_err)? {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some(slug) = name.strip_suffix(&suffix) {
                slugs.push(slug.to_string());
            }
        }
        Ok(slugs)
    }

    /// Load one post by slug
    pub async fn try_load(&self, slug: &str) -> Result<Post, PostError> {
        let path = self.post_path(slug);
        let text = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PostError::NotFound {
                    slug: slug.to_string(),
                });
            }
            Err(e) => {
                return Err(PostError::Unreadable {
                    slug: slug.to_string(),
                    source: e,
                });
            }
        };
        serde_json::from_str(&text).map_err(|e| PostError::Malformed {
            slug: slug.to_string(),
            source: e,
        })
    }

    /// List available slugs, logging and returning empty on any failure
    pub async fn list_slugs(&self) -> Vec<String> {
        match self.try_list_slugs().await {
            Ok(slugs) => slugs,
            Err(e) => {
                tracing::error!("{}", e);
                Vec::new()
            }
        }
    }

    /// Load one post, logging and returning `None` on any failure
    pub async fn load(&self, slug: &str) -> Option<Post> {
        match self.try_load(slug).await {
            Ok(post) => Some(post),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    const VALID_POST: &str = r##"{
        "title": "Launch notes",
        "subtitle": "A new chapter",
        "date": "January 2024",
        "readingTime": "4 min read",
        "headingLinks": [
            {"label": "Paper", "href": "https://example.com/paper.pdf", "icon": "paper"},
            {"label": "Code", "href": "https://github.com/example", "icon": "github"}
        ],
        "intro": ["We are live.", "Here is what changed."],
        "highlight": {"label": "TL;DR", "text": "Everything shipped."},
        "sections": [
            {
                "heading": "What we built",
                "paragraphs": ["A lot."],
                "bullets": ["Resolver", "Repository"]
            }
        ],
        "quote": {"text": "Ship it.", "attribution": "The team"},
        "cta": {"title": "Work with us", "body": "We are hiring.", "actionHref": "#team"}
    }"##;

    fn store_with_posts(files: &[(&str, &str)]) -> (TempDir, PostStore) {
        let tmp = TempDir::new().unwrap();
        for (name, body) in files {
            std_fs::write(tmp.path().join(name), body).unwrap();
        }
        let store = PostStore::new(tmp.path());
        (tmp, store)
    }

    #[tokio::test]
    async fn test_list_slugs_filters_by_extension() {
        let (_tmp, store) = store_with_posts(&[
            ("a.json", "{}"),
            ("b.json", "{}"),
            ("readme.txt", "ignore me"),
        ]);
        let mut slugs = store.try_list_slugs().await.unwrap();
        slugs.sort();
        assert_eq!(slugs, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_list_slugs_missing_dir_returns_empty() {
        let store = PostStore::new("/nonexistent/posts/dir");
        assert!(matches!(
            store.try_list_slugs().await,
            Err(PostError::DirUnreadable { .. })
        ));
        assert!(store.list_slugs().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_slug() {
        let (_tmp, store) = store_with_posts(&[]);
        assert!(matches!(
            store.try_load("missing-slug").await,
            Err(PostError::NotFound { .. })
        ));
        assert!(store.load("missing-slug").await.is_none());
    }

    #[tokio::test]
    async fn test_load_malformed_post() {
        let (_tmp, store) = store_with_posts(&[("broken.json", "{not json")]);
        assert!(matches!(
            store.try_load("broken").await,
            Err(PostError::Malformed { .. })
        ));
        assert!(store.load("broken").await.is_none());
    }

    #[tokio::test]
    async fn test_load_valid_post() {
        let (_tmp, store) = store_with_posts(&[("launch.json", VALID_POST)]);
        let post = store.try_load("launch").await.unwrap();

        assert_eq!(post.title, "Launch notes");
        assert_eq!(post.subtitle.as_deref(), Some("A new chapter"));
        assert_eq!(post.date, "January 2024");
        assert_eq!(post.reading_time.as_deref(), Some("4 min read"));
        assert_eq!(post.heading_links.len(), 2);
        assert_eq!(post.heading_links[0].icon, Some(HeadingLinkIcon::Paper));
        assert_eq!(post.intro.len(), 2);
        assert_eq!(post.highlight.as_ref().unwrap().label.as_deref(), Some("TL;DR"));
        assert_eq!(post.sections[0].bullets, vec!["Resolver", "Repository"]);
        assert_eq!(post.quote.as_ref().unwrap().attribution.as_deref(), Some("The team"));
        assert_eq!(post.cta.as_ref().unwrap().action_href.as_deref(), Some("#team"));
        assert!(post.cta.as_ref().unwrap().action_label.is_none());
    }

    #[tokio::test]
    async fn test_serialize_then_load_round_trips() {
        let original: Post = serde_json::from_str(VALID_POST).unwrap();
        let (_tmp, store) = store_with_posts(&[(
            "roundtrip.json",
            &serde_json::to_string_pretty(&original).unwrap(),
        )]);
        let loaded = store.try_load("roundtrip").await.unwrap();
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_minimal_post_optional_fields_default() {
        let (_tmp, store) = store_with_posts(&[(
            "minimal.json",
            r#"{
                "title": "Short note",
                "date": "2023",
                "intro": ["Just a note."],
                "sections": []
            }"#,
        )]);
        let post = store.try_load("minimal").await.unwrap();
        assert!(post.subtitle.is_none());
        assert!(post.heading_links.is_empty());
        assert!(post.highlight.is_none());
        assert!(post.quote.is_none());
        assert!(post.cta.is_none());
    }
}
