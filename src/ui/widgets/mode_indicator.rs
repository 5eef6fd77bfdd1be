use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::app::AppMode;
use crate::messages::LinkState;
use crate::ui::theme;

/// Header bar: mode tabs on the left, broker link badge on the right
pub struct ModeIndicatorWidget {
    pub current: AppMode,
    pub link: LinkState,
}

impl Widget for ModeIndicatorWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        // Tinted strip sets the header off from the chart area below it
        buf.set_style(area, Style::default().bg(theme::HEADER_BG));

        if area.width < 30 {
            return;
        }

        let modes = [AppMode::Plot, AppMode::Monitor];
        let mut x = area.x + 1;

        for mode in &modes {
            let is_current = *mode == self.current;
            let label = format!(" {} ", mode.label());

            let style = if is_current {
                Style::default().fg(theme::BG).bg(theme::ACCENT)
            } else {
                Style::default().fg(theme::DIM)
            };

            buf.set_string(x, area.y, &label, style);
            x += label.len() as u16 + 1;
        }

        let badge = format!("● {}", self.link.label());
        let badge_color = match self.link {
            LinkState::Connected => theme::LINK_OK,
            LinkState::Connecting => theme::DIM,
            LinkState::Lost(_) => theme::LINK_DOWN,
        };
        let badge_width = badge.chars().count() as u16;
        if area.width > badge_width + 2 {
            buf.set_string(
                area.x + area.width - badge_width - 1,
                area.y,
                &badge,
                Style::default().fg(badge_color),
            );
        }
    }
}
