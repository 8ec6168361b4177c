use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::LoadError;
use crate::page_key::PageKey;


pub const DEFAULT_API_BASE_URL: &str = "https://chess-ajc.piposplace.com";
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(500);
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 5.0;

// All fields are optional in serialized form: a missing field takes the default value, so an
// empty object is a valid config.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub api_base_url: String,
    // Artificial delay between showing the loader and sending the request.
    #[serde(with = "humantime_serde")]
    pub throttle: Duration,
    // How close to the bottom of the document (in CSS pixels) a scroll must get to load more.
    pub scroll_threshold_px: f64,
    pub gallery_selector: String,
    pub loader_selector: String,
    pub loader_visible_class: String,
    // Each batch goes into a new element of this kind appended to the gallery.
    pub fragment_tag: String,
    pub fragment_class: String,
    // Prepended to `chess_game_id` to get the selector of the board placeholder.
    pub board_selector_prefix: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            throttle: DEFAULT_THROTTLE,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            gallery_selector: ".monthGames".to_owned(),
            loader_selector: ".loader".to_owned(),
            loader_visible_class: "show".to_owned(),
            fragment_tag: "blockMonthGame".to_owned(),
            fragment_class: "monthGame".to_owned(),
            board_selector_prefix: ".".to_owned(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> { serde_json::from_str(s) }

    pub fn monthgames_url(&self, key: PageKey) -> Result<Url, LoadError> {
        let mut url = Url::parse(&self.api_base_url)?;
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                LoadError::InvalidUrl(format!("\"{}\" cannot be a base", self.api_base_url))
            })?;
            segments.pop_if_empty().push("monthgames");
        }
        url.query_pairs_mut()
            .append_pair("year", &key.year.to_string())
            .append_pair("month", &key.month.to_string());
        Ok(url)
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(GalleryConfig::from_json("{}").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn partial_json_overrides() {
        let config = GalleryConfig::from_json(
            r#"{"api_base_url": "http://localhost:8889", "throttle": "1s 200ms"}"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8889");
        assert_eq!(config.throttle, Duration::from_millis(1200));
        assert_eq!(config.loader_selector, ".loader");
    }

    #[test]
    fn monthgames_url() {
        let config = GalleryConfig::default();
        assert_eq!(
            config.monthgames_url(PageKey::new(2024, 4)).unwrap().as_str(),
            "https://chess-ajc.piposplace.com/monthgames?year=2024&month=4"
        );
    }

    #[test]
    fn monthgames_url_keeps_base_path() {
        let config = GalleryConfig {
            api_base_url: "http://localhost:8889/chess/".to_owned(),
            ..GalleryConfig::default()
        };
        assert_eq!(
            config.monthgames_url(PageKey::new(2023, 12)).unwrap().as_str(),
            "http://localhost:8889/chess/monthgames?year=2023&month=12"
        );
    }

    #[test]
    fn bad_base_url() {
        let config = GalleryConfig {
            api_base_url: "not a url".to_owned(),
            ..GalleryConfig::default()
        };
        assert!(matches!(
            config.monthgames_url(PageKey::new(2024, 1)),
            Err(LoadError::InvalidUrl(_))
        ));
        let config = GalleryConfig {
            api_base_url: "mailto:someone@example.com".to_owned(),
            ..GalleryConfig::default()
        };
        assert!(matches!(
            config.monthgames_url(PageKey::new(2024, 1)),
            Err(LoadError::InvalidUrl(_))
        ));
    }
}
