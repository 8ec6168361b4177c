use serde::{Deserialize, Serialize};


// Snapshot of the document scroll position, in CSS pixels.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn is_near_bottom(&self, threshold: f64) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - threshold
    }
}
