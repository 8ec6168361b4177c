use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use chess_gallery::{GalleryView, GameBoard, ViewResult};
use log::{debug, info};


// Stands in for the page: each fragment goes to its own file (if there is an output directory)
// and boards are only logged.
pub struct ConsoleView {
    out_dir: Option<PathBuf>,
    fragments_written: Cell<usize>,
}

impl ConsoleView {
    pub fn new(out_dir: Option<PathBuf>) -> Self {
        ConsoleView { out_dir, fragments_written: Cell::new(0) }
    }

    pub fn fragments_written(&self) -> usize { self.fragments_written.get() }
}

impl GalleryView for ConsoleView {
    fn show_loader(&self) -> ViewResult {
        debug!("Loading...");
        Ok(())
    }
    fn hide_loader(&self) -> ViewResult { Ok(()) }

    fn append_fragment(&self, html: &str) -> ViewResult {
        let index = self.fragments_written.get();
        if let Some(dir) = &self.out_dir {
            let path = dir.join(format!("{index:03}.html"));
            fs::write(&path, html)
                .map_err(|err| format!("Cannot write {}: {err}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        self.fragments_written.set(index + 1);
        Ok(())
    }

    fn render_board(&self, game: &GameBoard) -> ViewResult {
        info!("Board {}: {}", game.chess_game_id, game.fen);
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use scopeguard::defer;

    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("gallery_console_{name}_{}", std::process::id()))
    }

    #[test]
    fn fragments_are_numbered_files() {
        let dir = test_dir("numbered_files");
        fs::create_dir_all(&dir).unwrap();
        defer! { let _ = fs::remove_dir_all(&dir); }
        let view = ConsoleView::new(Some(dir.clone()));
        view.append_fragment("<p>1</p>").unwrap();
        view.append_fragment("<p>2</p>").unwrap();
        assert_eq!(view.fragments_written(), 2);
        assert_eq!(fs::read_to_string(dir.join("000.html")).unwrap(), "<p>1</p>");
        assert_eq!(fs::read_to_string(dir.join("001.html")).unwrap(), "<p>2</p>");
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = test_dir("does_not_exist").join("nested");
        let view = ConsoleView::new(Some(dir));
        assert!(view.append_fragment("<p/>").is_err());
        assert_eq!(view.fragments_written(), 0);
    }
}
