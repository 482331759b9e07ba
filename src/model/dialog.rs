//! Visibility state of the modal dialog
//!
//! The dialog is an overlay holding exactly one of two panels. It keeps no
//! history: records live in the store and form input lives in the editor, so
//! switching panels back and forth loses nothing.

use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};

/// The two mutually exclusive panels inside the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    List,
    Editor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dialog {
    visible: bool,
    panel: Panel,
    frame_area: Rect,
}

impl Dialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_list_visible(&self) -> bool {
        self.visible && self.panel == Panel::List
    }

    pub fn is_editor_visible(&self) -> bool {
        self.visible && self.panel == Panel::Editor
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show_list(&mut self) {
        self.panel = Panel::List;
    }

    pub fn show_editor(&mut self) {
        self.panel = Panel::Editor;
    }

    pub fn toggle_panel(&mut self) {
        match self.panel {
            Panel::List => self.show_editor(),
            Panel::Editor => self.show_list(),
        }
    }

    /// Records the size of the whole terminal, used for hit-testing clicks.
    pub fn set_frame_area(&mut self, area: Rect) {
        self.frame_area = area;
    }

    /// Whether a click at (`column`, `row`) landed on the overlay.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        overlay_area(self.frame_area).contains(Position::new(column, row))
    }
}

/// Centred rectangle the overlay occupies within `area`.
pub fn overlay_area(area: Rect) -> Rect {
    let width = (area.width * 4 / 5).clamp(area.width.min(40), area.width);
    let height = (area.height * 4 / 5).clamp(area.height.min(12), area.height);
    let [vertical] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(vertical);
    centered
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dialog_default_hidden_on_list() {
        let dialog = Dialog::new();
        assert!(!dialog.is_visible());
        assert_eq!(dialog.panel(), Panel::List);
        assert!(!dialog.is_list_visible());
    }

    #[test]
    fn test_show_and_hide() {
        let mut dialog = Dialog::new();
        dialog.show();
        assert!(dialog.is_visible());
        assert!(dialog.is_list_visible());

        dialog.hide();
        assert!(!dialog.is_visible());
        assert!(!dialog.is_list_visible());
        assert!(!dialog.is_editor_visible());
    }

    #[test]
    fn test_panels_are_mutually_exclusive() {
        let mut dialog = Dialog::new();
        dialog.show();

        dialog.show_editor();
        assert!(dialog.is_editor_visible());
        assert!(!dialog.is_list_visible());

        dialog.show_list();
        assert!(dialog.is_list_visible());
        assert!(!dialog.is_editor_visible());
    }

    #[test]
    fn test_panel_survives_hide() {
        let mut dialog = Dialog::new();
        dialog.show();
        dialog.show_editor();
        dialog.hide();
        dialog.show();
        assert!(dialog.is_editor_visible());
    }

    #[test]
    fn test_toggle_panel() {
        let mut dialog = Dialog::new();
        dialog.toggle_panel();
        assert_eq!(dialog.panel(), Panel::Editor);
        dialog.toggle_panel();
        assert_eq!(dialog.panel(), Panel::List);
    }

    #[test]
    fn test_overlay_area_is_centered() {
        let area = overlay_area(Rect::new(0, 0, 100, 50));
        assert_eq!(area, Rect::new(10, 5, 80, 40));
    }

    #[test]
    fn test_overlay_area_small_terminal_uses_everything() {
        let area = overlay_area(Rect::new(0, 0, 30, 10));
        assert_eq!(area, Rect::new(0, 0, 30, 10));
    }

    #[test]
    fn test_contains() {
        let mut dialog = Dialog::new();
        dialog.set_frame_area(Rect::new(0, 0, 100, 50));
        assert!(dialog.contains(50, 25));
        assert!(dialog.contains(10, 5));
        assert!(!dialog.contains(9, 5));
        assert!(!dialog.contains(95, 48));
    }
}
