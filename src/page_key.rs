use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;


// Identifies a batch of games on the server: all games finished in a given calendar month.
//
// Values come from the server and are not validated beyond `has_more`. In particular, the server
// uses `0/0` to signal that there is nothing older to show.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct PageKey {
    pub year: i32,
    pub month: i32,
}

pub fn has_more_month_games(year: i32, month: i32) -> bool { year > 0 && month > 0 }

impl PageKey {
    pub fn new(year: i32, month: i32) -> Self { PageKey { year, month } }

    // Uses local time when the offset is available, because that's what the user sees as
    // "this month". Falls back to UTC otherwise.
    pub fn current_month() -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::from_date_time(now)
    }

    pub fn from_date_time(t: OffsetDateTime) -> Self {
        PageKey {
            year: t.year(),
            month: u8::from(t.month()).into(),
        }
    }

    pub fn has_more(self) -> bool { has_more_month_games(self.year, self.month) }

    pub fn previous(self) -> Self {
        if self.month <= 1 {
            PageKey { year: self.year - 1, month: 12 }
        } else {
            PageKey { year: self.year, month: self.month - 1 }
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
