//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Folio;

/// Generate the static site
///
/// Posts that cannot be read or parsed are skipped with a warning; the rest
/// of the site still generates.
pub async fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let store = folio.posts();
    let mut slugs = store.list_slugs().await;
    slugs.sort();

    let mut posts = Vec::new();
    for slug in slugs {
        match store.try_load(&slug).await {
            Ok(post) => posts.push((slug, post)),
            Err(e) => {
                tracing::warn!("Skipping post: {}", e);
            }
        }
    }

    tracing::info!("Loaded {} posts", posts.len());

    let generator = Generator::new(folio);
    generator.generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
