//! Main application model with state management

use std::sync::Arc;
use tokio::sync::Mutex;

use super::catalog::{Album, Catalog, Song};
use super::player::PlayerState;
use super::types::{BrowseTab, UiState};

/// Main application model containing all state.
///
/// The catalog is read-only and injected at construction. Player and UI
/// state are only mutated through the methods here; the view receives
/// cloned snapshots. Every mutation bumps a revision counter, which is what
/// the draw loop watches to decide whether anything needs repainting.
pub struct AppModel {
    catalog: Arc<Catalog>,
    player: Arc<Mutex<PlayerState>>,
    ui_state: Arc<Mutex<UiState>>,
    should_quit: Arc<Mutex<bool>>,
    revision: Arc<Mutex<u64>>,
}

impl AppModel {
    pub fn new(catalog: Catalog) -> Self {
        let initial_song = catalog.initial_song().clone();
        Self {
            catalog: Arc::new(catalog),
            player: Arc::new(Mutex::new(PlayerState::new(initial_song))),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
            revision: Arc::new(Mutex::new(0)),
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        self.catalog.clone()
    }

    /// Monotonic state version; moves on every mutation, never on reads.
    pub async fn revision(&self) -> u64 {
        *self.revision.lock().await
    }

    async fn bump_revision(&self) {
        *self.revision.lock().await += 1;
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
        self.bump_revision().await;
    }

    // ========================================================================
    // Player state
    // ========================================================================

    pub async fn get_player(&self) -> PlayerState {
        self.player.lock().await.clone()
    }

    pub async fn is_player_expanded(&self) -> bool {
        self.player.lock().await.is_expanded()
    }

    pub async fn play_song(&self, song: Song) {
        self.player.lock().await.select_song(song);
        self.bump_revision().await;
    }

    pub async fn toggle_playback(&self) {
        self.player.lock().await.toggle_playback();
        self.bump_revision().await;
    }

    /// Nudges the playhead by `delta_secs` (negative to rewind); lands
    /// clamped to the song bounds like any other seek.
    pub async fn seek_by(&self, delta_secs: f32) {
        let mut player = self.player.lock().await;
        let target = player.progress() + delta_secs;
        player.set_progress(target);
        drop(player);
        self.bump_revision().await;
    }

    /// Advances the playhead by elapsed wall time while playing. Saturates
    /// at the song duration; the play flag is left alone because nothing
    /// follows the current song.
    pub async fn advance_progress(&self, elapsed_secs: f32) {
        let mut player = self.player.lock().await;
        if !player.is_playing() || elapsed_secs <= 0.0 {
            return;
        }
        let target = player.progress() + elapsed_secs;
        player.set_progress(target);
        drop(player);
        self.bump_revision().await;
    }

    pub async fn expand_player(&self) {
        self.player.lock().await.expand();
        self.bump_revision().await;
    }

    pub async fn collapse_player(&self) {
        self.player.lock().await.collapse();
        self.bump_revision().await;
    }

    pub async fn player_drag_update(&self, vertical_offset: f32) {
        self.player.lock().await.drag_update(vertical_offset);
        self.bump_revision().await;
    }

    pub async fn player_handle_drag(&self, vertical_offset: f32, release_offset: f32) {
        self.player.lock().await.handle_drag(vertical_offset, release_offset);
        self.bump_revision().await;
    }

    // ========================================================================
    // Browse UI state
    // ========================================================================

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn cycle_tab_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_tab = state.active_tab.next();
        drop(state);
        self.bump_revision().await;
    }

    pub async fn cycle_tab_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_tab = state.active_tab.prev();
        drop(state);
        self.bump_revision().await;
    }

    pub async fn set_active_tab(&self, tab: BrowseTab) {
        let mut state = self.ui_state.lock().await;
        state.active_tab = tab;
        drop(state);
        self.bump_revision().await;
    }

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_tab {
            BrowseTab::Albums => {
                if state.album_selected > 0 {
                    state.album_selected -= 1;
                }
            }
            BrowseTab::Songs => {
                if state.song_selected > 0 {
                    state.song_selected -= 1;
                }
            }
        }
        drop(state);
        self.bump_revision().await;
    }

    pub async fn move_selection_down(&self) {
        let mut state = self.ui_state.lock().await;
        match state.active_tab {
            BrowseTab::Albums => {
                if state.album_selected < self.catalog.albums.len().saturating_sub(1) {
                    state.album_selected += 1;
                }
            }
            BrowseTab::Songs => {
                if state.song_selected < self.catalog.songs.len().saturating_sub(1) {
                    state.song_selected += 1;
                }
            }
        }
        drop(state);
        self.bump_revision().await;
    }

    pub async fn get_selected_song(&self) -> Option<Song> {
        let state = self.ui_state.lock().await;
        self.catalog.songs.get(state.song_selected).cloned()
    }

    pub async fn get_selected_album(&self) -> Option<Album> {
        let state = self.ui_state.lock().await;
        self.catalog.albums.get(state.album_selected).cloned()
    }

    pub async fn show_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = true;
        drop(state);
        self.bump_revision().await;
    }

    pub async fn hide_help_popup(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_help_popup = false;
        drop(state);
        self.bump_revision().await;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> AppModel {
        AppModel::new(Catalog::sample())
    }

    #[tokio::test]
    async fn starts_with_initial_song_collapsed() {
        let model = model();
        let player = model.get_player().await;
        assert_eq!(player.current_song(), model.catalog().initial_song());
        assert!(!player.is_playing());
        assert!(!player.is_expanded());
    }

    #[tokio::test]
    async fn play_selected_song_updates_player() {
        let model = model();
        model.set_active_tab(BrowseTab::Songs).await;
        model.move_selection_down().await;

        let song = model.get_selected_song().await.unwrap();
        model.play_song(song.clone()).await;

        let player = model.get_player().await;
        assert_eq!(player.current_song(), &song);
        assert!(player.is_playing());
        assert_eq!(player.progress(), 0.0);
    }

    #[tokio::test]
    async fn selection_clamps_at_both_ends() {
        let model = model();
        model.set_active_tab(BrowseTab::Songs).await;

        model.move_selection_up().await;
        assert_eq!(model.get_ui_state().await.song_selected, 0);

        let last = model.catalog().songs.len() - 1;
        for _ in 0..model.catalog().songs.len() + 5 {
            model.move_selection_down().await;
        }
        assert_eq!(model.get_ui_state().await.song_selected, last);
    }

    #[tokio::test]
    async fn tabs_keep_independent_cursors() {
        let model = model();
        model.set_active_tab(BrowseTab::Albums).await;
        model.move_selection_down().await;
        model.set_active_tab(BrowseTab::Songs).await;

        let ui = model.get_ui_state().await;
        assert_eq!(ui.album_selected, 1);
        assert_eq!(ui.song_selected, 0);
    }

    #[tokio::test]
    async fn advance_progress_saturates_at_duration() {
        let model = model();
        let song = model.catalog().songs[1].clone();
        let duration = song.duration_secs;
        model.play_song(song).await;

        model.advance_progress(duration + 100.0).await;
        assert_eq!(model.get_player().await.progress(), duration);

        // Still playing: nothing follows the current song
        assert!(model.get_player().await.is_playing());
    }

    #[tokio::test]
    async fn advance_progress_is_a_no_op_while_paused() {
        let model = model();
        model.advance_progress(10.0).await;
        assert_eq!(model.get_player().await.progress(), 0.0);
    }

    #[tokio::test]
    async fn revision_moves_on_mutation_not_on_reads() {
        let model = model();
        let r0 = model.revision().await;

        let _ = model.get_player().await;
        let _ = model.get_ui_state().await;
        assert_eq!(model.revision().await, r0);

        model.toggle_playback().await;
        let r1 = model.revision().await;
        assert!(r1 > r0);

        model.expand_player().await;
        assert!(model.revision().await > r1);
    }
}
