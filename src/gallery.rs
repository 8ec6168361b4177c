// Infinite-scroll pagination over monthly game batches.
//
// The loader is a small state machine:
//
//   Idle --(start / scroll near bottom)--> Loading --(load finished)--> Idle
//                                                  \--(no continuation)--> Exhausted
//
// All I/O goes through `GamesSource`, `GalleryView` and `Pause`, so the same loader runs in the
// browser, in the console tool and in tests. Everything is single-threaded: the session lives in
// a `RefCell` that is never borrowed across an await point.

use std::cell::RefCell;
use std::time::Duration;

use async_trait::async_trait;
use instant::Instant;
use log::{debug, info, warn};
use scopeguard::defer;
use strum::Display;

use crate::batch::{GameBoard, GamesBatch};
use crate::config::GalleryConfig;
use crate::error::LoadError;
use crate::page_key::PageKey;
use crate::scroll::ScrollMetrics;


pub type ViewResult = Result<(), String>;

#[async_trait(?Send)]
pub trait GamesSource {
    async fn fetch_month_games(&self, key: PageKey) -> Result<GamesBatch, LoadError>;
}

pub trait GalleryView {
    fn show_loader(&self) -> ViewResult;
    fn hide_loader(&self) -> ViewResult;
    // Adds `html` to the gallery as a new child. Content from previous batches stays.
    fn append_fragment(&self, html: &str) -> ViewResult;
    // Draws a board in the placeholder for `game`. Must be called after the fragment containing
    // the placeholder has been appended.
    fn render_board(&self, game: &GameBoard) -> ViewResult;
}

#[async_trait(?Send)]
pub trait Pause {
    async fn pause(&self, duration: Duration);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum LoaderState {
    Idle,
    Loading,
    // The server said there is nothing older. Scrolling does nothing from now on.
    Exhausted,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LoadOutcome {
    Appended {
        key: PageKey,
        games: usize,
        boards_rendered: usize,
        next: PageKey,
    },
    // The key does not point to any games, so nothing was requested.
    Skipped { key: PageKey },
    // The error has already been logged. The next page key is unchanged.
    Failed { key: PageKey, error: LoadError },
}

impl LoadOutcome {
    pub fn is_appended(&self) -> bool { matches!(self, LoadOutcome::Appended { .. }) }
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadOutcome::Failed { error, .. } => Some(error),
            LoadOutcome::Appended { .. } | LoadOutcome::Skipped { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct GallerySession {
    next: PageKey,
    state: LoaderState,
}

pub struct PaginatedLoader<S, V, P> {
    source: S,
    view: V,
    pause: P,
    config: GalleryConfig,
    session: RefCell<GallerySession>,
}

impl<S, V, P> PaginatedLoader<S, V, P>
where
    S: GamesSource,
    V: GalleryView,
    P: Pause,
{
    pub fn new(source: S, view: V, pause: P, config: GalleryConfig, first_key: PageKey) -> Self {
        PaginatedLoader {
            source,
            view,
            pause,
            config,
            session: RefCell::new(GallerySession {
                next: first_key,
                state: LoaderState::Idle,
            }),
        }
    }

    pub fn source(&self) -> &S { &self.source }
    pub fn view(&self) -> &V { &self.view }
    pub fn pause(&self) -> &P { &self.pause }
    pub fn config(&self) -> &GalleryConfig { &self.config }
    pub fn next_page_key(&self) -> PageKey { self.session.borrow().next }
    pub fn state(&self) -> LoaderState { self.session.borrow().state }
    pub fn is_busy(&self) -> bool { self.state() == LoaderState::Loading }

    // Moves the loader into `Loading` and returns the key to load, if a load is allowed now.
    // The caller must follow up with `load_month_games` for the returned key.
    pub fn start(&self) -> Option<PageKey> {
        let key = self.try_begin_load();
        if key.is_none() {
            debug!("Initial load skipped: loader is {}", self.state());
        }
        key
    }

    pub fn on_scroll(&self, metrics: ScrollMetrics) -> Option<PageKey> {
        if !metrics.is_near_bottom(self.config.scroll_threshold_px) {
            return None;
        }
        self.try_begin_load()
    }

    pub async fn run_initial_load(&self) -> Option<LoadOutcome> {
        let key = self.start()?;
        Some(self.load_month_games(key).await)
    }

    pub async fn run_scroll(&self, metrics: ScrollMetrics) -> Option<LoadOutcome> {
        let key = self.on_scroll(metrics)?;
        Some(self.load_month_games(key).await)
    }

    // Loads one batch and appends it to the gallery. Never fails: errors are logged and reported
    // in the outcome. The loader is busy while this runs and goes back to idle afterwards, even
    // if the future is dropped halfway.
    //
    // Exclusivity is only guaranteed for loads that went through `start` or `on_scroll`. Calling
    // this directly does not check whether another load is in flight.
    pub async fn load_month_games(&self, key: PageKey) -> LoadOutcome {
        self.session.borrow_mut().state = LoaderState::Loading;
        if let Err(err) = self.view.show_loader() {
            warn!("Cannot show loader: {err}");
        }
        defer! { self.finish_load(); }

        self.pause.pause(self.config.throttle).await;
        if !key.has_more() {
            debug!("No games to load for {key}");
            return LoadOutcome::Skipped { key };
        }
        match self.fetch_and_show(key).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!("{error}");
                LoadOutcome::Failed { key, error }
            }
        }
    }

    fn try_begin_load(&self) -> Option<PageKey> {
        let mut session = self.session.borrow_mut();
        if session.state != LoaderState::Idle || !session.next.has_more() {
            return None;
        }
        session.state = LoaderState::Loading;
        Some(session.next)
    }

    async fn fetch_and_show(&self, key: PageKey) -> Result<LoadOutcome, LoadError> {
        let request_start = Instant::now();
        let batch = self.source.fetch_month_games(key).await?;
        debug!(
            "Fetched {} games for {key} in {:?}",
            batch.games.len(),
            request_start.elapsed()
        );

        self.view.append_fragment(&batch.html).map_err(LoadError::Render)?;
        let mut boards_rendered = 0;
        for game in batch.games.iter() {
            match self.view.render_board(game) {
                Ok(()) => boards_rendered += 1,
                Err(err) => warn!("Cannot render board for game {}: {err}", game.chess_game_id),
            }
        }

        let next = batch.next_page_key();
        self.session.borrow_mut().next = next;
        info!("Loaded {} games for {key}, next is {next}", batch.games.len());
        Ok(LoadOutcome::Appended {
            key,
            games: batch.games.len(),
            boards_rendered,
            next,
        })
    }

    fn finish_load(&self) {
        if let Err(err) = self.view.hide_loader() {
            warn!("Cannot hide loader: {err}");
        }
        let mut session = self.session.borrow_mut();
        session.state = if session.next.has_more() {
            LoaderState::Idle
        } else {
            LoaderState::Exhausted
        };
    }
}
