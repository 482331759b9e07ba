//! Create/edit form state
//!
//! The editor owns the form inputs, the focused field, the additional
//! details toggle and the inline validation error. `bind_submit` registers
//! where validated drafts go; invalid drafts never leave the editor.

use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tui_textarea::{CursorMove, TextArea};

use crate::core::msg::Msg;
use crate::domain::record::UserRecord;
use crate::domain::text::escape_text;

pub const NAME_REQUIRED: &str = "Name is required";
pub const CATEGORY_PLACEHOLDER: &str = "Select a category";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Add,
    Edit,
}

/// Focusable controls, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Phone,
    AdditionalDetails,
    Category,
    Submit,
}

impl Field {
    pub fn is_text(&self) -> bool {
        matches!(self, Field::Name | Field::Email | Field::Phone)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Editor<'a> {
    mode: EditorMode,
    id: Option<String>,
    name: TextArea<'a>,
    email: TextArea<'a>,
    phone: TextArea<'a>,
    has_additional_details: bool,
    category: Option<String>,
    categories: Vec<String>,
    focus: Field,
    name_error: Option<String>,
    // the record `populate` loaded, used to keep untouched fields byte-exact
    original: Option<UserRecord>,
    sender: Option<UnboundedSender<Msg>>,
}

impl<'a> Editor<'a> {
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            categories,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Add => "Add User",
            EditorMode::Edit => "Edit User",
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn name_error(&self) -> Option<&str> {
        self.name_error.as_deref()
    }

    pub fn has_additional_details(&self) -> bool {
        self.has_additional_details
    }

    /// The category control is only shown while the toggle is on.
    pub fn is_category_visible(&self) -> bool {
        self.has_additional_details
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn textarea(&self, field: Field) -> Option<&TextArea<'a>> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            _ => None,
        }
    }

    /// Fills every control from an existing record and switches to edit mode.
    ///
    /// The inputs show the escaped text; fields left untouched are written
    /// back exactly as stored by [`Editor::get_data`].
    pub fn populate(&mut self, record: &UserRecord) {
        self.mode = EditorMode::Edit;
        self.id = record.id().map(str::to_owned);
        self.name = single_line(&record.name);
        self.email = single_line(&record.email);
        self.phone = single_line(&record.phone);
        self.has_additional_details = record.has_additional_details;
        self.category = record.category().map(str::to_owned);
        self.original = Some(record.clone());
        self.focus = Field::Name;
        self.clear_errors();
    }

    /// Resets the form for a new record.
    pub fn clear(&mut self) {
        self.mode = EditorMode::Add;
        self.id = None;
        self.name = TextArea::default();
        self.email = TextArea::default();
        self.phone = TextArea::default();
        self.has_additional_details = false;
        self.category = None;
        self.original = None;
        self.focus = Field::Name;
        self.clear_errors();
    }

    /// Reads the current draft. Edited text is trimmed and `category` is
    /// dropped whenever the toggle is off, whatever the selector still holds.
    pub fn get_data(&self) -> UserRecord {
        let original = self.original.as_ref();
        UserRecord {
            id: self.id.clone(),
            name: draft_value(&self.name, original.map(|r| r.name.as_str())),
            email: draft_value(&self.email, original.map(|r| r.email.as_str())),
            phone: draft_value(&self.phone, original.map(|r| r.phone.as_str())),
            has_additional_details: self.has_additional_details,
            category: if self.has_additional_details {
                self.category.clone()
            } else {
                None
            },
        }
    }

    /// Checks the only required field and marks it on failure.
    pub fn validate(&mut self) -> bool {
        self.clear_errors();

        if value_of(&self.name).trim().is_empty() {
            self.name_error = Some(NAME_REQUIRED.to_string());
            self.focus = Field::Name;
            return false;
        }

        true
    }

    pub fn bind_submit(&mut self, sender: UnboundedSender<Msg>) {
        self.sender = Some(sender);
    }

    /// Validates and, when valid, sends the draft. Returns whether it was sent.
    pub fn submit(&mut self) -> Result<bool> {
        if !self.validate() {
            return Ok(false);
        }

        let sender = self
            .sender
            .as_ref()
            .ok_or_else(|| eyre!("editor used before bind_submit"))?;
        sender.send(Msg::SubmitEditor(self.get_data()))?;
        Ok(true)
    }

    pub fn toggle_additional_details(&mut self) {
        self.has_additional_details = !self.has_additional_details;
        if !self.has_additional_details {
            self.category = None;
            if self.focus == Field::Category {
                self.focus = Field::AdditionalDetails;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('s'), KeyModifiers::CONTROL) | (KeyCode::Enter, _) => {
                self.submit()?;
            }
            (KeyCode::Tab, _) | (KeyCode::Down, _) => self.focus_next(),
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => self.focus_previous(),
            (KeyCode::Char(' '), _) if self.focus == Field::AdditionalDetails => {
                self.toggle_additional_details();
            }
            (KeyCode::Right, _) if self.focus == Field::Category => self.cycle_category(true),
            (KeyCode::Left, _) if self.focus == Field::Category => self.cycle_category(false),
            _ => match self.focused_textarea_mut() {
                Some(textarea) => {
                    textarea.input(key);
                }
                None => return Ok(false),
            },
        }
        Ok(true)
    }

    /// Inserts pasted text into the focused input, flattened to one line.
    pub fn handle_paste(&mut self, text: &str) {
        let text = escape_text(text);
        if let Some(textarea) = self.focused_textarea_mut() {
            textarea.insert_str(text);
        }
    }

    fn clear_errors(&mut self) {
        self.name_error = None;
    }

    fn focused_textarea_mut(&mut self) -> Option<&mut TextArea<'a>> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            _ => None,
        }
    }

    fn visible_fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::Name, Field::Email, Field::Phone, Field::AdditionalDetails];
        if self.is_category_visible() {
            fields.push(Field::Category);
        }
        fields.push(Field::Submit);
        fields
    }

    fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + 1) % fields.len()];
    }

    fn focus_previous(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + fields.len() - 1) % fields.len()];
    }

    /// Steps through the placeholder followed by the configured categories.
    fn cycle_category(&mut self, forward: bool) {
        let len = self.categories.len() + 1;
        let current = self
            .category
            .as_ref()
            .and_then(|c| self.categories.iter().position(|option| option == c))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.category = next
            .checked_sub(1)
            .and_then(|i| self.categories.get(i))
            .cloned();
    }
}

fn single_line<'a>(value: &str) -> TextArea<'a> {
    let mut textarea = TextArea::new(vec![escape_text(value)]);
    textarea.move_cursor(CursorMove::End);
    textarea
}

fn value_of(textarea: &TextArea<'_>) -> String {
    textarea.lines().join(" ")
}

/// The stored value when the input still shows it unchanged, else the
/// trimmed input.
fn draft_value(textarea: &TextArea<'_>, stored: Option<&str>) -> String {
    let current = value_of(textarea);
    match stored {
        Some(stored) if escape_text(stored) == current => stored.to_string(),
        _ => current.trim().to_string(),
    }
}
