use ratatui::prelude::*;
use ratatui::widgets::{
    Cell, HighlightSpacing, Paragraph, Row, StatefulWidget, Table, TableState, Wrap,
};

use crate::domain::text::truncate_to_width;
use crate::model::list::{UserList, DELETE_CONFIRMATION, EMPTY_STATE};

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Draws the list panel: the table of users, or the empty-state text when
/// there are none, plus the delete prompt while one is pending.
pub struct UserTable<'a> {
    list: &'a UserList,
}

impl<'a> UserTable<'a> {
    pub fn new(list: &'a UserList) -> Self {
        Self { list }
    }

    fn prompt(&self) -> Option<Line<'a>> {
        let row = self.list.pending_delete()?;
        Some(Line::from(vec![
            Span::styled(DELETE_CONFIRMATION, Style::default().fg(Color::Yellow).bold()),
            Span::raw(" "),
            Span::styled(format!("({})", row.name), Style::default().italic()),
            Span::raw(" [y/N]"),
        ]))
    }
}

impl Widget for UserTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.list.is_empty() {
            Paragraph::new(EMPTY_STATE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        }

        let [table_area, prompt_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(25),
        ];
        // the table keeps a column for the highlight symbol left of the cells
        let [_, cells_area] = Layout::horizontal([
            Constraint::Length(Line::from(HIGHLIGHT_SYMBOL).width() as u16),
            Constraint::Fill(1),
        ])
        .areas(table_area);
        let column_widths: Vec<usize> = Layout::horizontal(widths)
            .spacing(1)
            .split(cells_area)
            .iter()
            .map(|rect| usize::from(rect.width))
            .collect();
        let cell = |text: &str, column: usize| {
            Cell::from(truncate_to_width(text, column_widths[column]))
        };

        let header = Row::new(["Name", "Email", "Phone"])
            .style(Style::default().bold().underlined())
            .bottom_margin(1);
        let rows = self.list.rows().iter().map(|row| {
            Row::new([
                cell(&row.name, 0),
                cell(&row.email, 1),
                cell(&row.phone, 2),
            ])
        });
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(Style::default().reversed())
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_spacing(HighlightSpacing::Always);

        let mut state = TableState::default().with_selected(self.list.selected_index());
        StatefulWidget::render(table, table_area, buf, &mut state);

        if let Some(prompt) = self.prompt() {
            Paragraph::new(prompt).render(prompt_area, buf);
        }
    }
}
