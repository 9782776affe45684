//! Href resolution for the site content document
//!
//! `content.json` may express a link either as a literal `href` or as the
//! name of an environment variable (`hrefEnv`) holding a base URL to splice a
//! relative path onto, or a full override URL. Resolution runs exactly once,
//! when the document is constructed; it never runs per render.

use lazy_static::lazy_static;
use regex::Regex;

use super::model::{
    Investors, LinkSentence, LinkSentenceSource, Navigation, NavigationLink, SiteContent,
    SiteContentSource, Team, Timeline, TimelineItem,
};

/// Fallback for a link that resolves to nothing
pub const FALLBACK_HREF: &str = "#";

lazy_static! {
    static ref SCHEME_RE: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*:").unwrap();
}

/// A named string lookup, normally the process environment
///
/// Injected into the resolver instead of reading ambient global state so that
/// resolution is deterministic under test.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for std::collections::HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Whether a direct value is a relative path to splice onto a base URL
///
/// Anchors (`#...`) and scheme-qualified values (`https:`, `mailto:`, ...)
/// are never joined.
fn is_relative_path(value: &str) -> bool {
    !value.is_empty() && !value.starts_with('#') && !SCHEME_RE.is_match(value)
}

/// Join a base URL and a path with exactly one slash between them
fn join_base_with_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Resolve one href from its optional literal value and environment key
///
/// - no env key, or the variable is unset/empty: the literal if present,
///   else `"#"` (a named-but-missing variable additionally logs a warning)
/// - env variable set and the literal is a relative path: base + path
/// - env variable set otherwise: the variable's value, literal ignored
pub fn resolve_href(direct: Option<&str>, env_key: Option<&str>, env: &dyn EnvSource) -> String {
    if let Some(key) = env_key {
        match env.var(key) {
            Some(value) if !value.is_empty() => {
                return match direct {
                    Some(path) if is_relative_path(path) => join_base_with_path(&value, path),
                    _ => value,
                };
            }
            _ => {
                tracing::warn!("content: environment variable \"{}\" is not defined", key);
            }
        }
    }
    match direct {
        // An empty literal would break the "every resolved href is non-empty"
        // invariant, so it counts as absent.
        Some(value) if !value.is_empty() => value.to_string(),
        _ => FALLBACK_HREF.to_string(),
    }
}

fn resolve_sentence(source: LinkSentenceSource, env: &dyn EnvSource) -> LinkSentence {
    LinkSentence {
        prefix: source.prefix,
        link_text: source.link_text,
        link_href: resolve_href(
            source.link_href.as_deref(),
            source.link_href_env.as_deref(),
            env,
        ),
        suffix: source.suffix,
    }
}

/// Resolve the raw content document into its final shape
///
/// Applied uniformly to every navigation link, every timeline entry, the team
/// CTA link and the investor body link. Missing environment variables are
/// non-fatal; resolution always completes.
pub fn resolve(source: SiteContentSource, env: &dyn EnvSource) -> SiteContent {
    SiteContent {
        site: source.site,
        navigation: Navigation {
            links: source
                .navigation
                .links
                .into_iter()
                .map(|link| NavigationLink {
                    label: link.label,
                    href: resolve_href(link.href.as_deref(), link.href_env.as_deref(), env),
                    external: link.external,
                })
                .collect(),
        },
        timeline: Timeline {
            section_id: source.timeline.section_id,
            items: source
                .timeline
                .items
                .into_iter()
                .map(|item| TimelineItem {
                    href: resolve_href(item.href.as_deref(), item.href_env.as_deref(), env),
                    post_slug: item.post_slug,
                    title_parts: item.title_parts,
                    description: item.description,
                    date: item.date,
                    badge: item.badge,
                    variant: item.variant,
                })
                .collect(),
        },
        team: Team {
            heading: source.team.heading,
            members: source.team.members,
            cta: resolve_sentence(source.team.cta, env),
        },
        investors: Investors {
            heading: source.investors.heading,
            body: resolve_sentence(source.investors.body, env),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_with(key: &str, value: &str) -> HashMap<String, String> {
        let mut env = HashMap::new();
        env.insert(key.to_string(), value.to_string());
        env
    }

    fn empty_env() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_no_env_key_returns_direct() {
        let env = empty_env();
        assert_eq!(resolve_href(Some("/about"), None, &env), "/about");
        assert_eq!(
            resolve_href(Some("https://example.com"), None, &env),
            "https://example.com"
        );
    }

    #[test]
    fn test_no_env_key_no_direct_falls_back() {
        let env = empty_env();
        assert_eq!(resolve_href(None, None, &env), "#");
    }

    #[test]
    fn test_relative_path_joins_base() {
        let env = env_with("BLOG_URL", "https://blog.example.com");
        assert_eq!(
            resolve_href(Some("/archive"), Some("BLOG_URL"), &env),
            "https://blog.example.com/archive"
        );
    }

    #[test]
    fn test_join_strips_trailing_slash_and_adds_leading() {
        let env = env_with("BLOG_URL", "https://blog.example.com/");
        assert_eq!(
            resolve_href(Some("archive"), Some("BLOG_URL"), &env),
            "https://blog.example.com/archive"
        );
        assert_eq!(
            resolve_href(Some("/archive"), Some("BLOG_URL"), &env),
            "https://blog.example.com/archive"
        );
    }

    #[test]
    fn test_env_overrides_non_relative_direct() {
        let env = env_with("HOME_URL", "https://example.com");
        // Absent, anchor and scheme-qualified directs are all replaced
        // wholesale, never joined.
        assert_eq!(resolve_href(None, Some("HOME_URL"), &env), "https://example.com");
        assert_eq!(
            resolve_href(Some("#"), Some("HOME_URL"), &env),
            "https://example.com"
        );
        assert_eq!(
            resolve_href(Some("https://old.example.com"), Some("HOME_URL"), &env),
            "https://example.com"
        );
        assert_eq!(
            resolve_href(Some("mailto:hi@example.com"), Some("HOME_URL"), &env),
            "https://example.com"
        );
    }

    #[test]
    fn test_unset_env_falls_back_to_direct() {
        let env = empty_env();
        assert_eq!(resolve_href(Some("/archive"), Some("BLOG_URL"), &env), "/archive");
        assert_eq!(resolve_href(None, Some("BLOG_URL"), &env), "#");
    }

    #[test]
    fn test_empty_env_value_counts_as_unset() {
        let env = env_with("BLOG_URL", "");
        assert_eq!(resolve_href(Some("/archive"), Some("BLOG_URL"), &env), "/archive");
    }

    #[test]
    fn test_anchor_direct_returned_verbatim_without_override() {
        // "#" doubles as "no link" and "in-page anchor"; with no override it
        // comes back untouched.
        let env = empty_env();
        assert_eq!(resolve_href(Some("#"), None, &env), "#");
        assert_eq!(resolve_href(Some("#team"), Some("UNSET"), &env), "#team");
    }

    #[test]
    fn test_is_relative_path() {
        assert!(is_relative_path("/archive"));
        assert!(is_relative_path("archive"));
        assert!(!is_relative_path(""));
        assert!(!is_relative_path("#team"));
        assert!(!is_relative_path("https://example.com"));
        assert!(!is_relative_path("mailto:hi@example.com"));
        assert!(!is_relative_path("git+ssh://example.com"));
    }

    fn sample_source() -> SiteContentSource {
        serde_json::from_str(
            r##"{
                "site": {
                    "name": "Jane Doe",
                    "hero": {"paragraphs": ["Hello.", "Welcome."]},
                    "footer": "© 2025"
                },
                "navigation": {
                    "links": [
                        {"label": "Updates", "href": "#updates"},
                        {"label": "Blog", "hrefEnv": "BLOG_URL", "external": true}
                    ]
                },
                "timeline": {
                    "sectionId": "updates",
                    "items": [
                        {
                            "href": "/archive",
                            "hrefEnv": "BLOG_URL",
                            "titleParts": [{"type": "text", "value": "Launched"}],
                            "description": "We launched.",
                            "date": "Jan 2024",
                            "variant": "primary"
                        }
                    ]
                },
                "team": {
                    "heading": "Team",
                    "members": ["Jane Doe"],
                    "cta": {
                        "prefix": "We are hiring —",
                        "linkText": "reach out",
                        "linkHrefEnv": "CONTACT_URL",
                        "suffix": "."
                    }
                },
                "investors": {
                    "heading": "Backed by",
                    "body": {
                        "prefix": "Funded by",
                        "linkText": "Example Capital",
                        "linkHref": "https://capital.example.com",
                        "suffix": "and angels."
                    }
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_document() {
        let mut env = env_with("BLOG_URL", "https://blog.example.com/");
        env.insert(
            "CONTACT_URL".to_string(),
            "https://example.com/contact".to_string(),
        );

        let content = resolve(sample_source(), &env);

        assert_eq!(content.navigation.links[0].href, "#updates");
        assert_eq!(content.navigation.links[1].href, "https://blog.example.com/");
        assert!(content.navigation.links[1].external);
        assert_eq!(
            content.timeline.items[0].href,
            "https://blog.example.com/archive"
        );
        assert_eq!(content.team.cta.link_href, "https://example.com/contact");
        assert_eq!(
            content.investors.body.link_href,
            "https://capital.example.com"
        );
    }

    #[test]
    fn test_resolve_without_env_recovers_everywhere() {
        let content = resolve(sample_source(), &empty_env());

        // Every href is still a concrete non-empty string.
        assert_eq!(content.navigation.links[1].href, "#");
        assert_eq!(content.timeline.items[0].href, "/archive");
        assert_eq!(content.team.cta.link_href, "#");
        for link in &content.navigation.links {
            assert!(!link.href.is_empty());
        }
    }

    #[test]
    fn test_resolve_is_idempotent_on_resolved_documents() {
        // A document with no env indirection resolves to itself.
        let source: SiteContentSource = {
            let resolved = resolve(sample_source(), &empty_env());
            serde_json::from_str(&serde_json::to_string(&resolved).unwrap()).unwrap()
        };
        let env = env_with("BLOG_URL", "https://blog.example.com");
        let content = resolve(source, &env);

        assert_eq!(content.navigation.links[1].href, "#");
        assert_eq!(content.timeline.items[0].href, "/archive");
        assert_eq!(content.team.cta.link_href, "#");
    }
}
