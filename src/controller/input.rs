//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::BrowseTab;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = self.model.lock().await;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            model.set_should_quit(true).await;
            return Ok(());
        }

        // Handle help popup (blocks all other interactions)
        if model.is_help_popup_open().await {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.hide_help_popup().await;
                    Ok(())
                }
                _ => Ok(()),
            };
        }

        // The expanded player owns the keyboard while it is up
        if model.is_player_expanded().await {
            match key.code {
                KeyCode::Esc => {
                    model.collapse_player().await;
                }
                KeyCode::Char(' ') => {
                    drop(model);
                    self.toggle_playback().await;
                }
                KeyCode::Left => {
                    drop(model);
                    self.seek_backward().await;
                }
                KeyCode::Right => {
                    drop(model);
                    self.seek_forward().await;
                }
                KeyCode::Char('h') | KeyCode::Char('H') => {
                    model.show_help_popup().await;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => {
                    model.set_should_quit(true).await;
                }
                _ => {}
            }
            return Ok(());
        }

        // Browse keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab | KeyCode::Right => {
                model.cycle_tab_forward().await;
            }
            KeyCode::BackTab | KeyCode::Left => {
                model.cycle_tab_backward().await;
            }
            KeyCode::Char('1') => {
                model.set_active_tab(BrowseTab::Albums).await;
            }
            KeyCode::Char('2') => {
                model.set_active_tab(BrowseTab::Songs).await;
            }
            KeyCode::Up => {
                model.move_selection_up().await;
            }
            KeyCode::Down => {
                model.move_selection_down().await;
            }
            KeyCode::Enter => {
                let active_tab = model.get_ui_state().await.active_tab;
                drop(model);
                match active_tab {
                    BrowseTab::Songs => self.play_selected_song().await,
                    BrowseTab::Albums => self.open_selected_album().await,
                }
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                drop(model);
                self.toggle_playback().await;
            }
            // Open the full player
            KeyCode::Char('o') | KeyCode::Char('O') => {
                model.expand_player().await;
            }
            // Show help popup
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup().await;
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use crate::model::{AppModel, Catalog};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn controller() -> AppController {
        AppController::new(Arc::new(Mutex::new(AppModel::new(Catalog::sample()))))
    }

    #[tokio::test]
    async fn enter_on_songs_tab_starts_the_selected_song() {
        let controller = controller();
        {
            let model = controller.model.lock().await;
            model.set_active_tab(BrowseTab::Songs).await;
            model.move_selection_down().await;
        }

        controller.handle_key_event(press(KeyCode::Enter)).await.unwrap();

        let model = controller.model.lock().await;
        let expected = model.catalog().songs[1].clone();
        let player = model.get_player().await;
        assert_eq!(player.current_song(), &expected);
        assert!(player.is_playing());
    }

    #[tokio::test]
    async fn open_key_expands_and_escape_collapses() {
        let controller = controller();

        controller.handle_key_event(press(KeyCode::Char('o'))).await.unwrap();
        assert!(controller.model.lock().await.is_player_expanded().await);

        controller.handle_key_event(press(KeyCode::Esc)).await.unwrap();
        assert!(!controller.model.lock().await.is_player_expanded().await);
    }

    #[tokio::test]
    async fn arrows_seek_only_while_expanded() {
        let controller = controller();
        {
            let model = controller.model.lock().await;
            let song = model.catalog().songs[0].clone();
            model.play_song(song).await;
        }

        // Collapsed: Right switches tabs, playhead untouched
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        {
            let model = controller.model.lock().await;
            assert_eq!(model.get_player().await.progress(), 0.0);
            assert_eq!(model.get_ui_state().await.active_tab, BrowseTab::Songs);
        }

        controller.handle_key_event(press(KeyCode::Char('o'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Right)).await.unwrap();
        let model = controller.model.lock().await;
        assert!(model.get_player().await.progress() > 0.0);
    }

    #[tokio::test]
    async fn help_popup_swallows_other_keys() {
        let controller = controller();

        controller.handle_key_event(press(KeyCode::Char('h'))).await.unwrap();
        controller.handle_key_event(press(KeyCode::Char(' '))).await.unwrap();

        let model = controller.model.lock().await;
        assert!(model.is_help_popup_open().await);
        assert!(!model.get_player().await.is_playing());
    }
}
