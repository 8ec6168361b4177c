use anyhow::Context;
use async_trait::async_trait;
use chess_gallery::{GalleryConfig, GamesBatch, GamesSource, LoadError, PageKey};
use log::debug;


pub struct ReqwestGamesSource {
    client: reqwest::Client,
    config: GalleryConfig,
}

impl ReqwestGamesSource {
    pub fn new(config: GalleryConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gallery_console/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Cannot build HTTP client")?;
        Ok(ReqwestGamesSource { client, config })
    }
}

fn network_error(err: reqwest::Error) -> LoadError { LoadError::Network(err.to_string()) }

#[async_trait(?Send)]
impl GamesSource for ReqwestGamesSource {
    async fn fetch_month_games(&self, key: PageKey) -> Result<GamesBatch, LoadError> {
        let url = self.config.monthgames_url(key)?;
        debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(network_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http { status: status.as_u16() });
        }
        let body = response.text().await.map_err(network_error)?;
        GamesBatch::from_json(&body)
    }
}
