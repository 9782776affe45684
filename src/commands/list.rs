//! List site posts

use anyhow::Result;

use crate::Folio;

/// Print every post slug with its title and date
pub async fn run(folio: &Folio) -> Result<()> {
    let store = folio.posts();
    let mut slugs = store.list_slugs().await;
    slugs.sort();

    println!("Posts ({}):", slugs.len());
    for slug in slugs {
        match store.try_load(&slug).await {
            Ok(post) => println!("  {} - {} [{}]", post.date, post.title, slug),
            Err(e) => println!("  {} (unreadable: {})", slug, e),
        }
    }

    Ok(())
}
