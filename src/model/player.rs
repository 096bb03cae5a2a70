//! Now-playing state and the mini/full player presentation machine.
//!
//! `PlayerState` is the single source of truth for what the player shows:
//! the loaded song, the play flag, the clamped progress position and the
//! collapsed/expanded presentation mode. The view renders from read-only
//! clones; every mutation goes through the operations here, and none of
//! them can fail. Bad inputs are clamped or ignored.

use super::catalog::Song;

/// How far (in screen coordinate units) a downward drag must travel before
/// releasing it dismisses the expanded player.
pub const DRAG_DISMISS_THRESHOLD: f32 = 150.0;

/// The two presentation modes of the now-playing UI
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerMode {
    Collapsed,
    Expanded,
}

#[derive(Clone, Debug)]
pub struct PlayerState {
    current_song: Song,
    is_playing: bool,
    progress: f32,
    is_expanded: bool,
    drag_offset: f32,
}

impl PlayerState {
    /// Starts collapsed and paused, with `initial_song` loaded at position 0.
    pub fn new(initial_song: Song) -> Self {
        Self {
            current_song: initial_song,
            is_playing: false,
            progress: 0.0,
            is_expanded: false,
            drag_offset: 0.0,
        }
    }

    pub fn current_song(&self) -> &Song {
        &self.current_song
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Elapsed seconds into the current song, always within
    /// `[0, current_song.duration_secs]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn mode(&self) -> PlayerMode {
        if self.is_expanded {
            PlayerMode::Expanded
        } else {
            PlayerMode::Collapsed
        }
    }

    /// The followed offset of an in-flight dismiss drag; 0 when idle.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    /// Loads `song` and starts it from the beginning. Whatever progress the
    /// previous song had is discarded; there is no queue or history, so a
    /// reselected song also restarts at 0.
    pub fn select_song(&mut self, song: Song) {
        tracing::info!(song = %song.title, "Song selected");
        self.current_song = song;
        self.progress = 0.0;
        self.is_playing = true;
    }

    pub fn toggle_playback(&mut self) {
        self.is_playing = !self.is_playing;
        tracing::debug!(is_playing = self.is_playing, "Playback toggled");
    }

    /// Moves the playhead. Out-of-range values are clamped to the song
    /// bounds rather than rejected, so scrub controls can feed raw input.
    pub fn set_progress(&mut self, value: f32) {
        self.progress = value.clamp(0.0, self.current_song.duration_secs);
    }

    /// Shows the full-screen player. Idempotent.
    pub fn expand(&mut self) {
        self.is_expanded = true;
    }

    /// Returns to the mini bar. Idempotent; also cancels any drag in flight.
    pub fn collapse(&mut self) {
        self.is_expanded = false;
        self.drag_offset = 0.0;
    }

    /// Follows the finger during a downward drag on the expanded player.
    /// Upward drags pin to 0: the player never travels above its resting
    /// position.
    pub fn drag_update(&mut self, vertical_offset: f32) {
        self.drag_offset = vertical_offset.max(0.0);
    }

    /// Ends a drag. Past the dismiss threshold the player collapses;
    /// otherwise it snaps back to fully expanded. Either way the followed
    /// offset returns to 0.
    pub fn drag_release(&mut self, release_offset: f32) {
        if release_offset > DRAG_DISMISS_THRESHOLD {
            tracing::debug!(release_offset, "Drag released past threshold, collapsing");
            self.collapse();
        } else {
            self.drag_offset = 0.0;
        }
    }

    /// Interprets a complete drag gesture: follow to `vertical_offset`,
    /// then release at `release_offset`.
    pub fn handle_drag(&mut self, vertical_offset: f32, release_offset: f32) {
        self.drag_update(vertical_offset);
        self.drag_release(release_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn player() -> PlayerState {
        PlayerState::new(Catalog::sample().initial_song().clone())
    }

    fn song_with_duration(duration_secs: f32) -> Song {
        Song {
            id: 99,
            title: "Fixture".to_string(),
            artist: "Fixture".to_string(),
            artwork: "art/fixture".to_string(),
            duration_secs,
        }
    }

    #[test]
    fn starts_collapsed_and_paused_at_zero() {
        let catalog = Catalog::sample();
        let state = PlayerState::new(catalog.initial_song().clone());
        assert_eq!(state.current_song(), catalog.initial_song());
        assert!(!state.is_playing());
        assert_eq!(state.progress(), 0.0);
        assert_eq!(state.mode(), PlayerMode::Collapsed);
        assert_eq!(state.drag_offset(), 0.0);
    }

    #[test]
    fn select_song_resets_progress_and_plays() {
        for song in Catalog::sample().songs {
            let mut state = player();
            state.set_progress(30.0);
            state.select_song(song.clone());
            assert_eq!(state.current_song(), &song);
            assert_eq!(state.progress(), 0.0);
            assert!(state.is_playing());
        }
    }

    #[test]
    fn reselecting_the_same_song_restarts_it() {
        let mut state = player();
        let song = state.current_song().clone();
        state.select_song(song.clone());
        state.set_progress(42.0);
        state.select_song(song);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn set_progress_clamps_to_song_bounds() {
        let mut state = player();
        state.select_song(song_with_duration(185.0));

        state.set_progress(-12.0);
        assert_eq!(state.progress(), 0.0);

        state.set_progress(90.5);
        assert_eq!(state.progress(), 90.5);

        state.set_progress(300.0);
        assert_eq!(state.progress(), 185.0);
    }

    #[test]
    fn toggle_playback_is_an_involution() {
        let mut state = player();
        let before = state.is_playing();
        state.toggle_playback();
        assert_eq!(state.is_playing(), !before);
        state.toggle_playback();
        assert_eq!(state.is_playing(), before);
    }

    #[test]
    fn expand_and_collapse_are_idempotent() {
        let mut state = player();

        state.expand();
        assert!(state.is_expanded());
        state.expand();
        assert!(state.is_expanded());

        state.collapse();
        assert!(!state.is_expanded());
        state.collapse();
        assert!(!state.is_expanded());

        state.expand();
        assert!(state.is_expanded());
    }

    #[test]
    fn drag_past_threshold_collapses() {
        let mut state = player();
        state.expand();
        state.handle_drag(200.0, 200.0);
        assert!(!state.is_expanded());
        assert_eq!(state.drag_offset(), 0.0);
    }

    #[test]
    fn drag_below_threshold_snaps_back() {
        let mut state = player();
        state.expand();
        state.handle_drag(80.0, 80.0);
        assert!(state.is_expanded());
        assert_eq!(state.drag_offset(), 0.0);
    }

    #[test]
    fn upward_drag_stays_pinned_at_rest() {
        let mut state = player();
        state.expand();
        state.drag_update(-50.0);
        assert_eq!(state.drag_offset(), 0.0);
        state.drag_update(-5.0);
        assert_eq!(state.drag_offset(), 0.0);
        state.drag_release(-50.0);
        assert!(state.is_expanded());
    }

    #[test]
    fn downward_drag_follows_the_finger() {
        let mut state = player();
        state.expand();
        state.drag_update(40.0);
        assert_eq!(state.drag_offset(), 40.0);
        state.drag_update(120.0);
        assert_eq!(state.drag_offset(), 120.0);
    }

    #[test]
    fn release_exactly_at_threshold_snaps_back() {
        let mut state = player();
        state.expand();
        state.handle_drag(DRAG_DISMISS_THRESHOLD, DRAG_DISMISS_THRESHOLD);
        assert!(state.is_expanded());
    }

    #[test]
    fn full_session_walkthrough() {
        let mut state = player();
        assert!(!state.is_playing());
        assert!(!state.is_expanded());
        assert_eq!(state.progress(), 0.0);

        state.select_song(song_with_duration(185.0));
        assert_eq!(state.progress(), 0.0);
        assert!(state.is_playing());

        state.set_progress(300.0);
        assert_eq!(state.progress(), 185.0);

        state.expand();
        assert!(state.is_expanded());

        state.handle_drag(200.0, 200.0);
        assert!(!state.is_expanded());
    }
}
