//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Starter content document
///
/// The blog and contact links demonstrate environment-driven hrefs: set
/// `BLOG_URL`/`CONTACT_URL` before generating, or leave them unset to fall
/// back to the literal values.
const CONTENT_SCAFFOLD: &str = r##"{
  "site": {
    "name": "Jane Doe",
    "hero": {
      "paragraphs": [
        "I build small, sturdy software and write about it occasionally.",
        "Currently working on developer tooling. Previously elsewhere."
      ]
    },
    "footer": "Thanks for reading"
  },
  "navigation": {
    "links": [
      { "label": "Updates", "href": "#updates" },
      { "label": "Team", "href": "#team" },
      { "label": "Blog", "href": "/archive", "hrefEnv": "BLOG_URL", "external": true }
    ]
  },
  "timeline": {
    "sectionId": "updates",
    "items": [
      {
        "postSlug": "hello-world",
        "titleParts": [
          { "type": "text", "value": "Launched " },
          { "type": "pi", "symbol": "π", "subscript": "0" }
        ],
        "description": "First public release, with launch notes.",
        "date": "Jan 2025",
        "badge": "New",
        "variant": "primary"
      },
      {
        "href": "#",
        "titleParts": [{ "type": "text", "value": "Started the project" }],
        "description": "Wrote the first prototype.",
        "date": "2024",
        "variant": "muted"
      }
    ]
  },
  "team": {
    "heading": "Team",
    "members": ["Jane Doe", "John Roe"],
    "cta": {
      "prefix": "We are always happy to talk —",
      "linkText": "get in touch",
      "linkHrefEnv": "CONTACT_URL",
      "suffix": "."
    }
  },
  "investors": {
    "heading": "Backed by",
    "body": {
      "prefix": "Supported by",
      "linkText": "friendly people",
      "linkHref": "#",
      "suffix": "and our own savings."
    }
  }
}
"##;

/// Starter post
const POST_SCAFFOLD: &str = r#"{
  "title": "Hello World",
  "subtitle": "Launch notes",
  "date": "January 2025",
  "readingTime": "2 min read",
  "intro": [
    "Welcome to the site. This post is generated from content/posts/hello-world.json.",
    "Edit it, or add more .json files next to it, and run folio-rs generate."
  ],
  "highlight": {
    "label": "TL;DR",
    "text": "One content.json for the landing page, one JSON file per post."
  },
  "sections": [
    {
      "heading": "How it works",
      "paragraphs": [
        "The landing page is described by content.json. Links can name an environment variable to resolve against at generation time."
      ],
      "bullets": [
        "hrefEnv names a base URL to splice a relative path onto",
        "unset variables fall back to the literal href, or #"
      ]
    }
  ],
  "cta": {
    "title": "Get in touch",
    "body": "Questions or ideas? We read everything.",
    "actionLabel": "Say hello",
    "actionHref": "/#team"
  }
}
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/posts"))?;

    fs::write(target_dir.join(crate::CONTENT_FILE), CONTENT_SCAFFOLD)?;
    fs::write(
        target_dir.join("content/posts/hello-world.json"),
        POST_SCAFFOLD,
    )?;

    Ok(())
}
