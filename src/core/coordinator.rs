//! Wires user intents to the record store and the presenters
//!
//! The coordinator owns the presenters but keeps no state of its own: the
//! records live in the store, the form input in the editor and the overlay
//! visibility in the dialog.

use std::time::Instant;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use tokio::sync::mpsc::UnboundedSender;

use crate::core::msg::Msg;
use crate::core::translator::{translate_key, KeyContext, KeyRoute};
use crate::domain::record::UserRecord;
use crate::infrastructure::config::Config;
use crate::infrastructure::storage::KeyValueStorage;
use crate::model::dialog::{overlay_area, Dialog, Panel};
use crate::model::editor::Editor;
use crate::model::list::UserList;
use crate::model::notifications::Notifications;
use crate::presentation::config::KeyBindings;
use crate::presentation::widgets::{
    DialogFrame, EditorForm, Landing, NotificationStack, UserTable,
};
use crate::repositories::user::UserRepository;

pub const USER_CREATED: &str = "User created successfully";
pub const USER_UPDATED: &str = "User updated successfully";
pub const USER_DELETED: &str = "User deleted successfully";
pub const SAVE_FAILED: &str = "Failed to save user";
pub const DELETE_FAILED: &str = "Failed to delete user";

const LIST_TITLE: &str = "Users";
const LIST_HINTS: &str = "a add · enter edit · d delete · ctrl-t form · esc close";
const EDITOR_HINTS: &str = "tab next · space toggle · ←/→ category · enter save · ctrl-t list · esc close";

pub struct Coordinator<'a, S> {
    store: UserRepository<S>,
    dialog: Dialog,
    list: UserList,
    editor: Editor<'a>,
    notifications: Notifications,
    keybindings: KeyBindings,
    tx: UnboundedSender<Msg>,
}

impl<'a, S: KeyValueStorage> Coordinator<'a, S> {
    pub fn new(store: UserRepository<S>, config: &Config, tx: UnboundedSender<Msg>) -> Self {
        Self {
            store,
            dialog: Dialog::new(),
            list: UserList::new(),
            editor: Editor::new(config.categories.clone()),
            notifications: Notifications::new(config.notifications.duration()),
            keybindings: config.keybindings.clone(),
            tx,
        }
    }

    /// Hooks the presenters up to the message channel and reads the store
    /// once. Must run before any input is handled.
    pub fn init(&mut self) {
        self.list.bind_events(self.tx.clone());
        self.editor.bind_submit(self.tx.clone());
        let records = self.store.list_all();
        log::info!("Loaded {} users", records.len());
        self.list.render(&records);
    }

    pub fn store(&self) -> &UserRepository<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut UserRepository<S> {
        &mut self.store
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn list(&self) -> &UserList {
        &self.list
    }

    pub fn editor(&self) -> &Editor<'a> {
        &self.editor
    }

    pub fn notifications(&self) -> &Notifications {
        &self.notifications
    }

    /// Applies one application message. System messages are the runner's
    /// business and are ignored here.
    pub fn update(&mut self, msg: Msg) {
        match msg {
            Msg::OpenList => self.open_list(),
            Msg::StartCreate => self.start_create(),
            Msg::StartEdit(id) => self.start_edit(&id),
            Msg::SubmitEditor(draft) => self.submit(draft),
            Msg::DeleteRecord(id) => self.delete(&id),
            Msg::Close => self.close(),
            Msg::TogglePanel => self.toggle_panel(),
            Msg::Tick => self.notifications.tick(Instant::now()),
            Msg::Quit | Msg::Suspend | Msg::Resume | Msg::Render | Msg::Resize(_, _) => {}
        }
    }

    pub fn open_list(&mut self) {
        self.dialog.show();
        self.dialog.show_list();
        self.refresh_list();
    }

    pub fn start_create(&mut self) {
        self.editor.clear();
        self.dialog.show();
        self.dialog.show_editor();
    }

    /// Opens the editor on a stored record. An id that no longer exists is
    /// ignored.
    pub fn start_edit(&mut self, id: &str) {
        let Some(record) = self.store.get_by_id(id) else {
            log::debug!("User {id} vanished before it could be edited");
            return;
        };
        self.editor.populate(&record);
        self.dialog.show();
        self.dialog.show_editor();
    }

    pub fn submit(&mut self, draft: UserRecord) {
        let is_new = draft.is_new();
        match self.store.save(draft) {
            Ok(saved) => {
                log::info!("Saved user {:?}", saved.id());
                self.notifications
                    .success(if is_new { USER_CREATED } else { USER_UPDATED });
                self.dialog.show_list();
                self.refresh_list();
                self.editor.clear();
            }
            Err(e) => {
                // the editor keeps its input so the user can retry
                log::error!("Failed to save user: {e}");
                self.notifications.error(SAVE_FAILED);
            }
        }
    }

    pub fn delete(&mut self, id: &str) {
        if self.store.delete_by_id(id) {
            self.refresh_list();
            self.notifications.success(USER_DELETED);
        } else {
            self.notifications.error(DELETE_FAILED);
        }
    }

    pub fn close(&mut self) {
        self.dialog.hide();
    }

    /// Switches between the list and the form without touching either.
    pub fn toggle_panel(&mut self) {
        self.dialog.toggle_panel();
        if self.dialog.is_list_visible() {
            self.refresh_list();
        }
    }

    fn refresh_list(&mut self) {
        let records = self.store.list_all();
        self.list.render(&records);
    }

    fn key_context(&self) -> KeyContext {
        if !self.dialog.is_visible() {
            return KeyContext::Landing;
        }
        match self.dialog.panel() {
            Panel::List => KeyContext::List {
                confirming: self.list.is_confirming(),
            },
            Panel::Editor => KeyContext::Editor,
        }
    }

    /// Routes a key press. Intents come back through the message channel.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match translate_key(key, self.key_context(), &self.keybindings) {
            KeyRoute::Msg(msg) => self.tx.send(msg)?,
            KeyRoute::List => {
                self.list.handle_key(key)?;
            }
            KeyRoute::Editor => {
                self.editor.handle_key(key)?;
            }
            KeyRoute::Ignore => {}
        }
        Ok(())
    }

    /// A left click outside the overlay closes it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.dialog.is_visible()
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && !self.dialog.contains(mouse.column, mouse.row)
        {
            self.tx.send(Msg::Close)?;
        }
        Ok(())
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.dialog.is_editor_visible() {
            self.editor.handle_paste(text);
        }
    }

    pub fn view(&mut self, frame: &mut Frame<'_>) {
        let area = frame.area();
        self.dialog.set_frame_area(area);
        frame.render_widget(Landing, area);

        if self.dialog.is_visible() {
            let overlay = overlay_area(area);
            let dialog_frame = match self.dialog.panel() {
                Panel::List => DialogFrame::new(LIST_TITLE, LIST_HINTS),
                Panel::Editor => DialogFrame::new(self.editor.title(), EDITOR_HINTS),
            };
            let inner = dialog_frame.inner(overlay);
            frame.render_widget(dialog_frame, overlay);
            match self.dialog.panel() {
                Panel::List => frame.render_widget(UserTable::new(&self.list), inner),
                Panel::Editor => frame.render_widget(EditorForm::new(&self.editor), inner),
            }
        }

        frame.render_widget(
            NotificationStack::new(self.notifications.notices(), Instant::now()),
            area,
        );
    }
}
