use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const HINT: &str = "Press 'o' to manage users, 'a' to add one, 'q' to quit";

/// Screen shown behind the overlay.
#[derive(Debug, Clone, Copy, Default)]
pub struct Landing;

impl Widget for Landing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, title_area, hint_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(Line::from(env!("CARGO_PKG_NAME").bold().cyan()))
            .alignment(Alignment::Center)
            .render(title_area, buf);
        Paragraph::new(Line::from(HINT.dark_gray()))
            .alignment(Alignment::Center)
            .render(hint_area, buf);
    }
}
