use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::domain::text::escape_text;
use crate::model::editor::{Editor, Field, CATEGORY_PLACEHOLDER};

const LABEL_WIDTH: u16 = 10;

/// Draws the create/edit form for an [`Editor`].
pub struct EditorForm<'e, 'a> {
    editor: &'e Editor<'a>,
}

impl<'e, 'a> EditorForm<'e, 'a> {
    pub fn new(editor: &'e Editor<'a>) -> Self {
        Self { editor }
    }

    fn focus_style(&self, field: Field) -> Style {
        if self.editor.focus() == field {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default()
        }
    }

    fn render_input(&self, field: Field, label: &str, area: Rect, buf: &mut Buffer) {
        let Some(textarea) = self.editor.textarea(field) else {
            return;
        };
        let [label_area, input_area] =
            Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Fill(1)])
                .areas(area);
        let required = field == Field::Name;
        Paragraph::new(Line::from(vec![
            Span::styled(label.to_string(), self.focus_style(field)),
            Span::styled(if required { " *" } else { "" }, Style::default().fg(Color::Red)),
        ]))
        .render(label_area.inner(Margin::new(0, 1)), buf);

        let mut border = Style::default().fg(Color::DarkGray);
        if self.editor.focus() == field {
            border = border.fg(Color::Cyan);
        }
        if required && self.editor.name_error().is_some() {
            border = border.fg(Color::Red);
        }

        // the cursor is only drawn in the focused input
        let mut textarea = textarea.clone();
        textarea.set_block(
            Block::bordered()
                .border_type(BorderType::Plain)
                .border_style(border),
        );
        textarea.set_cursor_line_style(Style::default());
        if self.editor.focus() != field {
            textarea.set_cursor_style(Style::default());
        }
        textarea.render(input_area, buf);
    }

    fn checkbox(&self) -> Line<'static> {
        let mark = if self.editor.has_additional_details() { "x" } else { " " };
        Line::from(vec![
            Span::raw(format!("[{mark}] ")),
            Span::styled("Additional details", self.focus_style(Field::AdditionalDetails)),
        ])
    }

    fn category_selector(&self) -> Line<'static> {
        let value = match self.editor.category() {
            Some(category) => Span::raw(escape_text(category)),
            None => Span::styled(CATEGORY_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        };
        Line::from(vec![
            Span::styled(
                format!("{:<width$}", "Category", width = usize::from(LABEL_WIDTH)),
                self.focus_style(Field::Category),
            ),
            Span::raw("◀ "),
            value,
            Span::raw(" ▶"),
        ])
    }

    fn submit_button(&self) -> Line<'static> {
        let style = if self.editor.focus() == Field::Submit {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Cyan)
        };
        Line::from(Span::styled(" Save ", style))
    }
}

impl Widget for EditorForm<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [name_area, error_area, email_area, phone_area, details_area, category_area, _, submit_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(area);

        self.render_input(Field::Name, "Name", name_area, buf);
        if let Some(error) = self.editor.name_error() {
            let [_, message_area] =
                Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Fill(1)])
                    .areas(error_area);
            Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .render(message_area, buf);
        }
        self.render_input(Field::Email, "Email", email_area, buf);
        self.render_input(Field::Phone, "Phone", phone_area, buf);
        Paragraph::new(self.checkbox()).render(details_area, buf);
        if self.editor.is_category_visible() {
            Paragraph::new(self.category_selector()).render(category_area, buf);
        }
        Paragraph::new(self.submit_button()).render(submit_area, buf);
    }
}
