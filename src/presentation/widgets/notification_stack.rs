use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::model::notifications::{Notice, NoticeKind};

const MAX_WIDTH: u16 = 40;
const NOTICE_HEIGHT: u16 = 3;

/// Stacks notices in the top-right corner, oldest first. A leaving notice
/// slides right and dims while its exit transition runs.
pub struct NotificationStack<'a> {
    notices: &'a [Notice],
    now: Instant,
}

impl<'a> NotificationStack<'a> {
    pub fn new(notices: &'a [Notice], now: Instant) -> Self {
        Self { notices, now }
    }
}

fn accent(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    }
}

fn icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "✔",
        NoticeKind::Error => "✖",
    }
}

impl Widget for NotificationStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = MAX_WIDTH.min(area.width);
        if width < 4 {
            return;
        }

        for (i, notice) in self.notices.iter().enumerate() {
            let Some(y) = u16::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(NOTICE_HEIGHT))
                .map(|offset| area.y + offset)
                .filter(|y| y + NOTICE_HEIGHT <= area.bottom())
            else {
                break;
            };

            let progress = notice.exit_progress(self.now);
            let shift = (f64::from(width) * progress).round() as u16;
            let visible = width.saturating_sub(shift);
            if visible == 0 {
                continue;
            }
            let rect = Rect::new(area.right() - width + shift, y, visible, NOTICE_HEIGHT);

            let mut style = Style::default().fg(accent(notice.kind()));
            if notice.is_leaving() {
                style = style.add_modifier(Modifier::DIM);
            }
            Clear.render(rect, buf);
            Paragraph::new(Line::from(vec![
                Span::styled(icon(notice.kind()), style),
                Span::raw(" "),
                Span::raw(notice.message()),
            ]))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            )
            .render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::notifications::Notifications;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_notices_stack_top_right() {
        let mut notifications = Notifications::default();
        let now = Instant::now();
        notifications.show_at("first", NoticeKind::Success, Duration::from_secs(3), now);
        notifications.show_at("second", NoticeKind::Error, Duration::from_secs(3), now);

        let area = Rect::new(0, 0, 60, 10);
        let mut buf = Buffer::empty(area);
        NotificationStack::new(notifications.notices(), now).render(area, &mut buf);

        assert!(row(&buf, 1).contains("✔ first"));
        assert!(row(&buf, 4).contains("✖ second"));
        assert!(row(&buf, 1).starts_with(&" ".repeat(20)));
        assert_eq!(buf[(20, 1)].fg, Color::Green);
    }

    #[test]
    fn test_leaving_notice_slides_and_dims() {
        let mut notifications = Notifications::default();
        let start = Instant::now();
        notifications.show_at("bye", NoticeKind::Success, Duration::from_millis(10), start);
        notifications.tick(start + Duration::from_millis(10));
        let now = start + Duration::from_millis(160);

        let area = Rect::new(0, 0, 60, 4);
        let mut buf = Buffer::empty(area);
        NotificationStack::new(notifications.notices(), now).render(area, &mut buf);

        // halfway through the exit transition the box starts 20 columns later
        assert_eq!(buf[(39, 0)].symbol(), " ");
        assert_eq!(buf[(40, 0)].symbol(), "╭");
        assert!(buf[(40, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_stack_stops_at_bottom() {
        let mut notifications = Notifications::default();
        for i in 0..5 {
            notifications.success(&format!("notice {i}"));
        }
        let area = Rect::new(0, 0, 60, 7);
        let mut buf = Buffer::empty(area);
        NotificationStack::new(notifications.notices(), Instant::now()).render(area, &mut buf);

        assert!(row(&buf, 1).contains("notice 0"));
        assert!(row(&buf, 4).contains("notice 1"));
        assert_eq!(row(&buf, 6), " ".repeat(60));
    }
}
