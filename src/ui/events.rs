//! Background task event handling.

use crate::app::{App, AppEvent};

/// Apply a background event to application state.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FetchCompleted { generation, result } => {
            app.apply_fetch(generation, result);
        }
    }
}
