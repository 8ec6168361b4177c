// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use chess_gallery::batch::board_selector;
use chess_gallery::{
    GalleryConfig, GalleryView, GameBoard, GamesBatch, GamesSource, LoadError, PageKey,
    PaginatedLoader, Pause, ScrollMetrics, ViewResult,
};


pub type TestLoader = PaginatedLoader<FakeSource, RecordingView, RecordingPause>;

// Replies with queued responses in order. When the queue is empty, replies with 404.
#[derive(Default)]
pub struct FakeSource {
    responses: RefCell<VecDeque<Result<GamesBatch, LoadError>>>,
    requests: RefCell<Vec<PageKey>>,
}

impl FakeSource {
    #[allow(dead_code)]
    pub fn new(responses: impl IntoIterator<Item = Result<GamesBatch, LoadError>>) -> Self {
        FakeSource {
            responses: RefCell::new(responses.into_iter().collect()),
            requests: RefCell::new(Vec::new()),
        }
    }
    #[allow(dead_code)]
    pub fn push(&self, response: Result<GamesBatch, LoadError>) {
        self.responses.borrow_mut().push_back(response);
    }
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<PageKey> { self.requests.borrow().clone() }
}

#[async_trait(?Send)]
impl GamesSource for FakeSource {
    async fn fetch_month_games(&self, key: PageKey) -> Result<GamesBatch, LoadError> {
        self.requests.borrow_mut().push(key);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(LoadError::Http { status: 404 }))
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RenderedBoard {
    pub selector: String,
    pub fen: String,
}

// Mimics the page: a gallery with children, a loader with a visibility flag and a list of boards
// drawn so far.
#[derive(Default)]
pub struct RecordingView {
    pub children: RefCell<Vec<String>>,
    pub boards: RefCell<Vec<RenderedBoard>>,
    pub loader_visible: Cell<bool>,
    pub loader_shown_count: Cell<usize>,
    pub fail_append: Cell<bool>,
    pub fail_board_ids: RefCell<Vec<String>>,
}

impl GalleryView for RecordingView {
    fn show_loader(&self) -> ViewResult {
        self.loader_visible.set(true);
        self.loader_shown_count.set(self.loader_shown_count.get() + 1);
        Ok(())
    }
    fn hide_loader(&self) -> ViewResult {
        self.loader_visible.set(false);
        Ok(())
    }
    fn append_fragment(&self, html: &str) -> ViewResult {
        if self.fail_append.get() {
            return Err("gallery is gone".to_owned());
        }
        self.children.borrow_mut().push(html.to_owned());
        Ok(())
    }
    fn render_board(&self, game: &GameBoard) -> ViewResult {
        if self.fail_board_ids.borrow().contains(&game.chess_game_id) {
            return Err(format!("no placeholder for {}", game.chess_game_id));
        }
        self.boards.borrow_mut().push(RenderedBoard {
            selector: board_selector(".", &game.chess_game_id),
            fen: game.fen.clone(),
        });
        Ok(())
    }
}

// Records requested pauses. With `yield_once` the pause returns control to the executor once
// before finishing, which lets tests observe the loader mid-flight.
#[derive(Default)]
pub struct RecordingPause {
    pub yield_once: bool,
    pub pauses: RefCell<Vec<Duration>>,
}

#[async_trait(?Send)]
impl Pause for RecordingPause {
    async fn pause(&self, duration: Duration) {
        self.pauses.borrow_mut().push(duration);
        if self.yield_once {
            async_std::task::yield_now().await;
        }
    }
}

#[allow(dead_code)]
pub fn game(id: &str, fen: &str) -> GameBoard {
    GameBoard {
        chess_game_id: id.to_owned(),
        fen: fen.to_owned(),
    }
}

#[allow(dead_code)]
pub fn batch(html: &str, games: Vec<GameBoard>, next_year: i32, next_month: i32) -> GamesBatch {
    GamesBatch {
        html: html.to_owned(),
        games,
        next_year,
        next_month,
    }
}

#[allow(dead_code)]
pub fn make_loader(
    responses: impl IntoIterator<Item = Result<GamesBatch, LoadError>>, first_key: PageKey,
) -> TestLoader {
    PaginatedLoader::new(
        FakeSource::new(responses),
        RecordingView::default(),
        RecordingPause::default(),
        GalleryConfig::default(),
        first_key,
    )
}

#[allow(dead_code)]
pub fn make_yielding_loader(
    responses: impl IntoIterator<Item = Result<GamesBatch, LoadError>>, first_key: PageKey,
) -> TestLoader {
    PaginatedLoader::new(
        FakeSource::new(responses),
        RecordingView::default(),
        RecordingPause { yield_once: true, ..RecordingPause::default() },
        GalleryConfig::default(),
        first_key,
    )
}

#[allow(dead_code)]
pub fn at_bottom() -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: 1200.0,
        scroll_height: 2000.0,
        client_height: 800.0,
    }
}

#[allow(dead_code)]
pub fn far_from_bottom() -> ScrollMetrics {
    ScrollMetrics {
        scroll_top: 100.0,
        scroll_height: 2000.0,
        client_height: 800.0,
    }
}
