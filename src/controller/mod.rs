//! Controller module - Input interpretation and dispatch
//!
//! This module contains the application controller that turns input events
//! into model operations. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `gestures`: Mouse events (mini-bar tap, drag-to-dismiss)
//! - `navigation`: Tab switching and browse-cursor movement
//! - `playback`: Song start, play/pause, seeking, and the playback clock

mod gestures;
mod input;
mod navigation;
mod playback;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

use crate::model::AppModel;
use gestures::DragGesture;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    drag: Arc<Mutex<Option<DragGesture>>>,
    last_tick: Arc<Mutex<Instant>>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>) -> Self {
        Self {
            model,
            drag: Arc::new(Mutex::new(None)),
            last_tick: Arc::new(Mutex::new(Instant::now())),
        }
    }
}
