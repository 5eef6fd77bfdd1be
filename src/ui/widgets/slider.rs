use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme;

/// Horizontal parameter slider: label, track with a filled portion, value.
/// The selected slider is the one the arrow keys adjust.
pub struct SliderWidget {
    pub label: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub selected: bool,
}

impl Widget for SliderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 16 || area.height < 2 {
            return;
        }

        let color = if self.selected { theme::ACCENT } else { theme::FG };

        // Label row with the numeric value right next to it
        let header = format!("{:<6} {:.2}", self.label, self.value);
        buf.set_string(area.x, area.y, &header, Style::default().fg(color));

        // Track row
        let track_width = area.width.saturating_sub(2) as usize;
        let span = self.max - self.min;
        let frac = if span > 0.0 {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let filled = (frac * track_width as f64).round() as usize;

        let mut track = String::with_capacity(track_width);
        for i in 0..track_width {
            track.push(if i < filled { '█' } else { '░' });
        }
        let track_style = if self.selected {
            Style::default().fg(theme::ACCENT)
        } else {
            Style::default().fg(theme::DIM)
        };
        buf.set_string(area.x + 1, area.y + 1, &track, track_style);
    }
}
