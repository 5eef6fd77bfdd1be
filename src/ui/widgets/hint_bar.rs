use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme;

/// Footer bar listing the key bindings active in the current mode
pub struct HintBarWidget {
    pub hints: Vec<(&'static str, &'static str)>,
}

impl Widget for HintBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        // Arrow keys are multi-byte glyphs, so spacing is left to the text
        // layout rather than any hand-kept column counter.
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                format!("[{key}]"),
                Style::default().fg(theme::ACCENT),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, Style::default().fg(theme::FG)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
