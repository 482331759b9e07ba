//! Record list presenter state
//!
//! Holds the rows produced by the last `render` call, the selected row and a
//! pending delete confirmation. Rows carry already-escaped text; the widget
//! draws them as they are.

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;

use crate::core::msg::Msg;
use crate::domain::record::UserRecord;
use crate::domain::text::{escape_text, or_placeholder};

pub const EMPTY_STATE: &str = "No users yet. Press 'a' to add one.";
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

/// One rendered row, keyed by record id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&UserRecord> for UserRow {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id().unwrap_or_default().to_string(),
            name: escape_text(&record.name),
            email: escape_text(or_placeholder(&record.email, "-")),
            phone: escape_text(or_placeholder(&record.phone, "-")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserList {
    rows: Vec<UserRow>,
    selected_index: Option<usize>,
    pending_delete: Option<String>,
    sender: Option<UnboundedSender<Msg>>,
}

impl UserList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all rows with one row per record, in the given order.
    pub fn render(&mut self, records: &[UserRecord]) {
        self.rows = records.iter().map(UserRow::from).collect();
        self.pending_delete = None;
        self.selected_index = match self.rows.len() {
            0 => None,
            len => Some(self.selected_index.unwrap_or(0).min(len - 1)),
        };
    }

    /// Registers the channel edit and delete intents are sent through.
    pub fn bind_events(&mut self, sender: UnboundedSender<Msg>) {
        self.sender = Some(sender);
    }

    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    /// When true the empty-state placeholder is shown instead of the table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_row(&self) -> Option<&UserRow> {
        self.selected_index.and_then(|i| self.rows.get(i))
    }

    /// The row waiting for a yes/no answer, if any.
    pub fn pending_delete(&self) -> Option<&UserRow> {
        let id = self.pending_delete.as_deref()?;
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn is_confirming(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn select(&mut self, index: usize) {
        if index < self.rows.len() {
            self.selected_index = Some(index);
        }
    }

    /// Handles a key press aimed at the list. Returns whether it was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if let Some(id) = self.pending_delete.take() {
            if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
                self.emit(Msg::DeleteRecord(id))?;
            }
            return Ok(true);
        }

        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Ok(false);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(row) = self.selected_row() {
                    self.emit(Msg::StartEdit(row.id.clone()))?;
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                self.pending_delete = self.selected_row().map(|row| row.id.clone());
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn select_previous(&mut self) {
        if let Some(index) = self.selected_index {
            self.selected_index = Some(index.saturating_sub(1));
        }
    }

    fn select_next(&mut self) {
        if let Some(index) = self.selected_index {
            self.selected_index = Some((index + 1).min(self.rows.len().saturating_sub(1)));
        }
    }

    fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.selected_index = Some(0);
        }
    }

    fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.selected_index = Some(self.rows.len() - 1);
        }
    }

    fn emit(&self, msg: Msg) -> Result<()> {
        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| eyre!("user list used before bind_events"))?;
        sender.send(msg)?;
        Ok(())
    }
}
