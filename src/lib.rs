#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod batch;
pub mod config;
pub mod error;
pub mod gallery;
pub mod page_key;
pub mod scroll;

pub use batch::{GameBoard, GamesBatch};
pub use config::GalleryConfig;
pub use error::LoadError;
pub use gallery::{
    GalleryView, GamesSource, LoadOutcome, LoaderState, PaginatedLoader, Pause, ViewResult,
};
pub use page_key::{PageKey, has_more_month_games};
pub use scroll::ScrollMetrics;
