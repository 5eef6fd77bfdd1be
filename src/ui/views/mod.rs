pub mod monitor_view;
pub mod plot_view;

use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::Frame;

pub trait View {
    fn render(&self, state: &AppState, frame: &mut Frame, area: Rect);
}
