//! Mouse event handling: mini-bar tap and drag-to-dismiss
//!
//! Terminal cells are far coarser than the touch points a dismiss gesture
//! is calibrated for, so drag travel is converted from rows to coordinate
//! units before it reaches the player state machine.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::view::{POINTS_PER_ROW, mini_player_area};
use super::AppController;

/// An in-flight dismiss drag on the expanded player
pub(crate) struct DragGesture {
    origin_row: u16,
}

impl DragGesture {
    fn offset_points(&self, row: u16) -> f32 {
        (row as f32 - self.origin_row as f32) * POINTS_PER_ROW
    }
}

impl AppController {
    pub async fn handle_mouse_event(&self, mouse: MouseEvent, screen: Rect) -> Result<()> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let model = self.model.lock().await;
                if model.is_player_expanded().await {
                    drop(model);
                    *self.drag.lock().await = Some(DragGesture { origin_row: mouse.row });
                } else if mini_player_area(screen).contains(Position::new(mouse.column, mouse.row)) {
                    tracing::debug!("Mini player tapped, expanding");
                    model.expand_player().await;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let offset = {
                    let drag = self.drag.lock().await;
                    drag.as_ref().map(|g| g.offset_points(mouse.row))
                };
                if let Some(offset) = offset {
                    let model = self.model.lock().await;
                    model.player_drag_update(offset).await;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(gesture) = self.drag.lock().await.take() {
                    // The release row is both the final followed position
                    // and the distance the dismissal is judged on
                    let offset = gesture.offset_points(mouse.row);
                    let model = self.model.lock().await;
                    model.player_handle_drag(offset, offset).await;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
