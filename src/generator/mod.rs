//! Site generator - renders the resolved content document and posts to HTML
//!
//! Plain string assembly, no template engine. The markup is a thin shell
//! around the content: a landing page (hero, timeline, team, investors) and
//! one page per post under `post/<slug>/`.

use anyhow::Result;
use std::fs;

use crate::content::{Post, SiteContent, TimelineItem, TimelineVariant, TitlePart};
use crate::content::store::HeadingLinkIcon;
use crate::helpers::{html_escape, link_to};
use crate::Folio;

/// Stylesheet embedded in the binary and written next to the pages
const STYLESHEET: &str = include_str!("style.css");

/// Renders the site into the public directory
pub struct Generator<'a> {
    folio: &'a Folio,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(folio: &'a Folio) -> Self {
        Self { folio }
    }

    /// Write the landing page, all post pages and the stylesheet
    pub fn generate(&self, posts: &[(String, Post)]) -> Result<()> {
        let public = &self.folio.public_dir;
        fs::create_dir_all(public.join("css"))?;
        fs::write(public.join("css/style.css"), STYLESHEET)?;
        fs::write(
            public.join("index.html"),
            render_index(&self.folio.content),
        )?;

        for (slug, post) in posts {
            let dir = public.join("post").join(slug);
            fs::create_dir_all(&dir)?;
            fs::write(dir.join("index.html"), render_post(post))?;
        }

        tracing::info!(
            "Wrote {} pages to {:?}",
            posts.len() + 1,
            self.folio.public_dir
        );
        Ok(())
    }
}

/// CSS class for a timeline variant
fn variant_class(variant: TimelineVariant) -> &'static str {
    match variant {
        TimelineVariant::Primary => "primary",
        TimelineVariant::Muted => "muted",
        TimelineVariant::Plain => "plain",
    }
}

/// CSS class suffix for a heading link icon
fn icon_class(icon: HeadingLinkIcon) -> &'static str {
    match icon {
        HeadingLinkIcon::Paper => "paper",
        HeadingLinkIcon::Github => "github",
        HeadingLinkIcon::External => "external",
        HeadingLinkIcon::Dog => "dog",
        HeadingLinkIcon::Linkedin => "linkedin",
    }
}

/// Render title parts as inline HTML
///
/// A symbol part becomes `symbol<sub>subscript</sub>`.
fn render_title_parts(parts: &[TitlePart]) -> String {
    parts
        .iter()
        .map(|part| match part {
            TitlePart::Text { value } => format!("<span>{}</span>", html_escape(value)),
            TitlePart::Pi { symbol, subscript } => format!(
                "<span class=\"symbol\">{}<sub>{}</sub></span>",
                html_escape(symbol),
                html_escape(subscript)
            ),
        })
        .collect()
}

/// Shared page shell
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
{}
</body>
</html>
"#,
        html_escape(title),
        body
    )
}

fn render_timeline_item(item: &TimelineItem) -> String {
    let mut inner = String::new();
    inner.push_str("<div class=\"item-head\">");
    if let Some(badge) = &item.badge {
        inner.push_str(&format!(
            "<span class=\"badge\">{}</span>",
            html_escape(badge)
        ));
    }
    inner.push_str(&format!(
        "<span class=\"item-title\">{}</span>",
        render_title_parts(&item.title_parts)
    ));
    inner.push_str(&format!("<time>{}</time>", html_escape(&item.date)));
    inner.push_str("</div>");
    inner.push_str(&format!(
        "<p class=\"item-desc\">{}</p>",
        html_escape(&item.description)
    ));

    let class = format!("timeline-item {}", variant_class(item.variant));
    match item.link_href() {
        Some(href) => {
            let target = if item.is_external() {
                r#" target="_blank" rel="noreferrer noopener""#
            } else {
                ""
            };
            format!(
                "<a class=\"{} linked\" href=\"{}\"{}>{}</a>\n",
                class,
                html_escape(&href),
                target,
                inner
            )
        }
        None => format!("<div class=\"{}\">{}</div>\n", class, inner),
    }
}

/// Render the landing page
pub fn render_index(content: &SiteContent) -> String {
    let mut body = String::new();

    body.push_str("<main id=\"top\">\n");

    // Header with site name and navigation
    body.push_str("<header>\n");
    body.push_str(&format!(
        "<a class=\"site-name\" href=\"#top\">{}</a>\n",
        html_escape(&content.site.name)
    ));
    body.push_str("<nav>\n");
    for link in &content.navigation.links {
        body.push_str(&link_to(&link.href, &link.label, link.external));
        body.push('\n');
    }
    body.push_str("</nav>\n</header>\n");

    // Hero
    body.push_str("<section class=\"hero\">\n");
    for paragraph in &content.site.hero.paragraphs {
        body.push_str(&format!("<p>{}</p>\n", html_escape(paragraph)));
    }
    body.push_str("</section>\n");

    // Timeline
    body.push_str(&format!(
        "<section id=\"{}\" class=\"timeline\">\n",
        html_escape(&content.timeline.section_id)
    ));
    for item in &content.timeline.items {
        body.push_str(&render_timeline_item(item));
    }
    body.push_str("</section>\n");

    // Team
    body.push_str("<section id=\"team\">\n");
    body.push_str(&format!("<h2>{}</h2>\n", html_escape(&content.team.heading)));
    body.push_str("<div class=\"members\">\n");
    for member in &content.team.members {
        body.push_str(&format!("<p>{}</p>\n", html_escape(member)));
    }
    body.push_str("</div>\n");
    let cta = &content.team.cta;
    body.push_str(&format!(
        "<p class=\"cta\">{} {}{}</p>\n",
        html_escape(&cta.prefix),
        link_to(&cta.link_href, &cta.link_text, true),
        html_escape(&cta.suffix)
    ));
    body.push_str("</section>\n");

    // Investors
    body.push_str("<section id=\"investors\">\n");
    body.push_str(&format!(
        "<h2>{}</h2>\n",
        html_escape(&content.investors.heading)
    ));
    let investor = &content.investors.body;
    body.push_str(&format!(
        "<p>{} {} {}</p>\n",
        html_escape(&investor.prefix),
        link_to(&investor.link_href, &investor.link_text, true),
        html_escape(&investor.suffix)
    ));
    body.push_str("</section>\n");

    body.push_str(&format!(
        "<footer>{}</footer>\n",
        html_escape(&content.site.footer)
    ));
    body.push_str("</main>\n");

    page(&content.site.name, &body)
}

/// Render one post page
pub fn render_post(post: &Post) -> String {
    let mut body = String::new();

    body.push_str("<main class=\"post\">\n");
    body.push_str("<a class=\"back\" href=\"/\">\u{2190} Back to updates</a>\n");

    body.push_str("<header>\n");
    if let Some(subtitle) = &post.subtitle {
        body.push_str(&format!(
            "<p class=\"subtitle\">{}</p>\n",
            html_escape(subtitle)
        ));
    }
    body.push_str(&format!("<h1>{}</h1>\n", html_escape(&post.title)));
    body.push_str(&format!(
        "<div class=\"meta\"><span>{}</span>",
        html_escape(&post.date)
    ));
    if let Some(reading_time) = &post.reading_time {
        body.push_str(&format!("<span>{}</span>", html_escape(reading_time)));
    }
    body.push_str("</div>\n");
    if !post.heading_links.is_empty() {
        body.push_str("<div class=\"heading-links\">\n");
        for link in &post.heading_links {
            let icon = link
                .icon
                .map(|i| format!(" icon-{}", icon_class(i)))
                .unwrap_or_default();
            body.push_str(&format!(
                "<a class=\"button{}\" href=\"{}\" target=\"_blank\" rel=\"noreferrer noopener\">{}</a>\n",
                icon,
                html_escape(&link.href),
                html_escape(&link.label)
            ));
        }
        body.push_str("</div>\n");
    }
    body.push_str("</header>\n");

    body.push_str("<section class=\"intro\">\n");
    for paragraph in &post.intro {
        body.push_str(&format!("<p>{}</p>\n", html_escape(paragraph)));
    }
    body.push_str("</section>\n");

    if let Some(highlight) = &post.highlight {
        body.push_str("<aside class=\"highlight\">\n");
        if let Some(label) = &highlight.label {
            body.push_str(&format!("<p class=\"label\">{}</p>\n", html_escape(label)));
        }
        body.push_str(&format!("<p>{}</p>\n", html_escape(&highlight.text)));
        body.push_str("</aside>\n");
    }

    for section in &post.sections {
        body.push_str("<section>\n");
        body.push_str(&format!("<h2>{}</h2>\n", html_escape(&section.heading)));
        for paragraph in &section.paragraphs {
            body.push_str(&format!("<p>{}</p>\n", html_escape(paragraph)));
        }
        if !section.bullets.is_empty() {
            body.push_str("<ul>\n");
            for bullet in &section.bullets {
                body.push_str(&format!("<li>{}</li>\n", html_escape(bullet)));
            }
            body.push_str("</ul>\n");
        }
        body.push_str("</section>\n");
    }

    if let Some(quote) = &post.quote {
        body.push_str("<figure class=\"quote\">\n");
        body.push_str(&format!(
            "<blockquote>\u{201c}{}\u{201d}</blockquote>\n",
            html_escape(&quote.text)
        ));
        if let Some(attribution) = &quote.attribution {
            body.push_str(&format!(
                "<figcaption>{}</figcaption>\n",
                html_escape(attribution)
            ));
        }
        body.push_str("</figure>\n");
    }

    if let Some(cta) = &post.cta {
        body.push_str("<section class=\"post-cta\">\n");
        body.push_str(&format!("<p class=\"label\">{}</p>\n", html_escape(&cta.title)));
        body.push_str(&format!("<p>{}</p>\n", html_escape(&cta.body)));
        if let Some(href) = &cta.action_href {
            let label = cta.action_label.as_deref().unwrap_or("Get in touch");
            body.push_str(&format!(
                "<a class=\"button\" href=\"{}\">{}</a>\n",
                html_escape(href),
                html_escape(label)
            ));
        }
        body.push_str("</section>\n");
    }

    body.push_str("</main>\n");

    page(&post.title, &body)
}
