use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Clear};

/// Bordered popup with a title on top and key hints on the bottom edge.
/// Wipes whatever was drawn underneath.
#[derive(Debug, Clone)]
pub struct DialogFrame<'a> {
    title: &'a str,
    hints: &'a str,
}

impl<'a> DialogFrame<'a> {
    pub fn new(title: &'a str, hints: &'a str) -> Self {
        Self { title, hints }
    }

    fn block(&self) -> Block<'a> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Line::from(format!(" {} ", self.title)).bold())
            .title_bottom(Line::from(format!(" {} ", self.hints)).dark_gray().right_aligned())
    }

    /// Area left for the panel once the border is drawn.
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area).inner(Margin::new(1, 0))
    }
}

impl Widget for DialogFrame<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        self.block().render(area, buf);
    }
}
