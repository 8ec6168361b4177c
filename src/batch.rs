use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::page_key::PageKey;


// A game whose board should be drawn on the page. `fen` describes the final position.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameBoard {
    pub chess_game_id: String,
    pub fen: String,
}

// One server response for `/monthgames`.
//
// `html` is pre-rendered markup containing a placeholder for each game in `games`. The body is
// otherwise not validated: unknown fields are ignored and `games` may be missing altogether.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GamesBatch {
    pub html: String,
    #[serde(default)]
    pub games: Vec<GameBoard>,
    pub next_year: i32,
    pub next_month: i32,
}

impl GamesBatch {
    pub fn from_json(body: &str) -> Result<Self, LoadError> { Ok(serde_json::from_str(body)?) }

    pub fn next_page_key(&self) -> PageKey { PageKey::new(self.next_year, self.next_month) }
}

// Selector of the element that should host the board for the given game.
pub fn board_selector(prefix: &str, chess_game_id: &str) -> String {
    format!("{prefix}{chess_game_id}")
}
