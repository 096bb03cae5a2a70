//! Playback control methods and the simulated playback clock

use std::time::Instant;

use super::AppController;

/// How far one arrow-key press moves the playhead
pub const SEEK_STEP_SECS: f32 = 5.0;

impl AppController {
    pub async fn play_selected_song(&self) {
        let model = self.model.lock().await;
        if let Some(song) = model.get_selected_song().await {
            tracing::debug!(song = %song.title, "Starting selected song");
            model.play_song(song).await;
        }
    }

    pub async fn toggle_playback(&self) {
        let model = self.model.lock().await;
        model.toggle_playback().await;
    }

    pub async fn seek_forward(&self) {
        let model = self.model.lock().await;
        model.seek_by(SEEK_STEP_SECS).await;
    }

    pub async fn seek_backward(&self) {
        let model = self.model.lock().await;
        model.seek_by(-SEEK_STEP_SECS).await;
    }

    /// Advances the playhead by the wall time elapsed since the previous
    /// tick. There is no audio engine behind the screen; this clock is what
    /// makes the progress bar move while the play flag is on. The clock is
    /// sampled every tick, playing or not, so unpausing never jumps.
    pub async fn tick(&self) {
        let now = Instant::now();
        let mut last_tick = self.last_tick.lock().await;
        let elapsed = now.duration_since(*last_tick).as_secs_f32();
        *last_tick = now;
        drop(last_tick);

        let model = self.model.lock().await;
        model.advance_progress(elapsed).await;
    }
}
