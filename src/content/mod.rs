//! Content module - site document model, href resolution and post storage

mod model;
pub mod resolver;
pub mod store;

pub use model::{
    Hero, Investors, LinkSentence, Navigation, NavigationLink, SiteContent, SiteContentSource,
    SiteMeta, Team, Timeline, TimelineItem, TimelineVariant, TitlePart,
};
pub use resolver::{resolve, EnvSource, ProcessEnv, FALLBACK_HREF};
pub use store::{Post, PostError, PostStore};
