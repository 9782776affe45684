//! Site content model
//!
//! Two shapes of the same document: the raw source as it sits in
//! `content.json` (href fields optional, possibly backed by an environment
//! variable) and the resolved document handed to the generator, where every
//! link is a concrete string.

use serde::{Deserialize, Serialize};

/// Presentation weight of a timeline entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineVariant {
    Primary,
    Muted,
    #[default]
    Plain,
}

/// One atomic unit of a timeline entry title
///
/// Either plain text or a symbol with a subscript (used for mathematical
/// notation like a pi with an index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TitlePart {
    Text { value: String },
    Pi { symbol: String, subscript: String },
}

/// Site name, hero paragraphs and footer text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    pub hero: Hero,
    pub footer: String,
}

/// Hero block of the landing page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hero {
    pub paragraphs: Vec<String>,
}

/// A resolved navigation link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationLink {
    pub label: String,
    pub href: String,
    /// Open in a new tab
    #[serde(default)]
    pub external: bool,
}

/// A resolved timeline entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    pub href: String,
    /// When set, the entry links to the post page instead of `href`
    pub post_slug: Option<String>,
    pub title_parts: Vec<TitlePart>,
    pub description: String,
    /// Free-form display string, never parsed
    pub date: String,
    pub badge: Option<String>,
    #[serde(default)]
    pub variant: TimelineVariant,
}

impl TimelineItem {
    /// The link target of the entry, if it has one
    ///
    /// A post slug wins over the literal href; a bare `"#"` means the entry
    /// is not a link at all.
    pub fn link_href(&self) -> Option<String> {
        if let Some(slug) = &self.post_slug {
            return Some(format!("/post/{}/", slug));
        }
        if self.href != "#" {
            return Some(self.href.clone());
        }
        None
    }

    /// Whether the link target leaves the site
    pub fn is_external(&self) -> bool {
        self.post_slug.is_none()
            && (self.href.starts_with("http://") || self.href.starts_with("https://"))
    }
}

/// A single sentence with one embedded link (team CTA, investor body)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSentence {
    pub prefix: String,
    pub link_text: String,
    pub link_href: String,
    pub suffix: String,
}

/// The fully resolved site content document
///
/// Constructed once per process by the resolver; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub site: SiteMeta,
    pub navigation: Navigation,
    pub timeline: Timeline,
    pub team: Team,
    pub investors: Investors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Navigation {
    pub links: Vec<NavigationLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub section_id: String,
    pub items: Vec<TimelineItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub heading: String,
    pub members: Vec<String>,
    pub cta: LinkSentence,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investors {
    pub heading: String,
    pub body: LinkSentence,
}

// ---- Raw source shapes (content.json before href resolution) ----

/// A navigation link as written in `content.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationLinkSource {
    pub label: String,
    pub href: Option<String>,
    /// Name of an environment variable holding the base or full URL
    pub href_env: Option<String>,
    #[serde(default)]
    pub external: bool,
}

/// A timeline entry as written in `content.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItemSource {
    pub href: Option<String>,
    pub href_env: Option<String>,
    pub post_slug: Option<String>,
    pub title_parts: Vec<TitlePart>,
    pub description: String,
    pub date: String,
    pub badge: Option<String>,
    #[serde(default)]
    pub variant: TimelineVariant,
}

/// A link sentence as written in `content.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSentenceSource {
    pub prefix: String,
    pub link_text: String,
    pub link_href: Option<String>,
    pub link_href_env: Option<String>,
    pub suffix: String,
}

/// The raw site content document
#[derive(Debug, Clone, Deserialize)]
pub struct SiteContentSource {
    pub site: SiteMeta,
    pub navigation: NavigationSource,
    pub timeline: TimelineSource,
    pub team: TeamSource,
    pub investors: InvestorsSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigationSource {
    pub links: Vec<NavigationLinkSource>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSource {
    pub section_id: String,
    pub items: Vec<TimelineItemSource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamSource {
    pub heading: String,
    pub members: Vec<String>,
    pub cta: LinkSentenceSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InvestorsSource {
    pub heading: String,
    pub body: LinkSentenceSource,
}
