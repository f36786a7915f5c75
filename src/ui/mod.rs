//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Wizard => forms::draw_wizard(frame, main_area, app),
        View::Submitted => forms::draw_confirmation(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog goes on top of everything
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    }
}
