use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, bail};
use async_trait::async_trait;
use chess_gallery::{
    GalleryConfig, GalleryView, GamesSource, LoadOutcome, PageKey, PaginatedLoader, Pause,
    ScrollMetrics,
};
use log::info;

use crate::console_view::ConsoleView;
use crate::network::ReqwestGamesSource;


// There is no real page, so every "scroll" lands at the very bottom.
const AT_BOTTOM: ScrollMetrics = ScrollMetrics {
    scroll_top: 0.0,
    scroll_height: 0.0,
    client_height: 0.0,
};

pub struct CrawlConfig {
    pub gallery: GalleryConfig,
    pub first_key: Option<PageKey>,
    pub max_pages: u32,
    pub out_dir: Option<PathBuf>,
    pub walk_months: bool,
}

pub struct AsyncStdPause;

#[async_trait(?Send)]
impl Pause for AsyncStdPause {
    async fn pause(&self, duration: Duration) { async_std::task::sleep(duration).await; }
}

pub fn run(config: CrawlConfig) -> anyhow::Result<()> {
    if let Some(dir) = &config.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
    }
    let first_key = config.first_key.unwrap_or_else(PageKey::current_month);
    let loader = PaginatedLoader::new(
        ReqwestGamesSource::new(config.gallery.clone())?,
        ConsoleView::new(config.out_dir),
        AsyncStdPause,
        config.gallery,
        first_key,
    );
    let loaded =
        async_std::task::block_on(crawl(&loader, config.max_pages, config.walk_months))?;
    info!(
        "Loaded {loaded} batches from {} ({} fragments), loader is {}, next is {}",
        loader.config().api_base_url,
        loader.view().fragments_written(),
        loader.state(),
        loader.next_page_key()
    );
    Ok(())
}

// Loads batches the way the gallery page would while the user keeps scrolling down. Returns the
// number of batches appended.
//
// With `walk_months`, a batch without continuation does not end the crawl: the month before the
// last appended one is requested directly, bypassing the exhausted loader.
pub async fn crawl<S, V, P>(
    loader: &PaginatedLoader<S, V, P>, max_pages: u32, walk_months: bool,
) -> anyhow::Result<u32>
where
    S: GamesSource,
    V: GalleryView,
    P: Pause,
{
    let mut loaded = 0;
    let mut last_appended: Option<PageKey> = None;
    let mut outcome = loader.run_initial_load().await;
    while loaded < max_pages {
        match outcome {
            None | Some(LoadOutcome::Skipped { .. }) => {
                let walk_to = last_appended
                    .filter(|_| walk_months)
                    .map(|key| key.previous())
                    .filter(|key| key.has_more());
                let Some(key) = walk_to else {
                    info!("No more games");
                    break;
                };
                info!("Server supplied no continuation, walking to {key}");
                outcome = Some(loader.load_month_games(key).await);
                continue;
            }
            Some(LoadOutcome::Failed { key, error }) => bail!("Failed to load {key}: {error}"),
            Some(LoadOutcome::Appended { key, .. }) => {
                loaded += 1;
                last_appended = Some(key);
            }
        }
        if loaded < max_pages {
            outcome = loader.run_scroll(AT_BOTTOM).await;
        }
    }
    Ok(loaded)
}
