//! Browse navigation: tab switching and album activation

use super::AppController;

impl AppController {
    /// The mock has no album-detail screen; the grid is display-only, so
    /// activating a card just records the intent.
    pub async fn open_selected_album(&self) {
        let model = self.model.lock().await;
        if let Some(album) = model.get_selected_album().await {
            tracing::debug!(album = %album.title, year = %album.year, "Album activated (display-only)");
        }
    }
}
