use std::time::Instant;

use chrono::Utc;
use entrecamadas_core::constants::{CARPE_DEFAULT_TITLE, MANIFEST_DEFAULT_TITLE};
use entrecamadas_core::{
    Cosmos, Message, MessageStore, NarrationError, NarrationState, Narrator, NewMessage, Tone,
    VisibleController,
};

use crate::ui::modal::ModalState;
use crate::ui::notifications::{Notification, NotificationQueue};
use crate::ui::text_editor::TextEditor;

/// Which part of the sidebar receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Title,
    #[default]
    Text,
    Key,
    Tone,
    List,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Title => Focus::Text,
            Focus::Text => Focus::Key,
            Focus::Key => Focus::Tone,
            Focus::Tone => Focus::List,
            Focus::List => Focus::Title,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Title => Focus::List,
            Focus::Text => Focus::Title,
            Focus::Key => Focus::Text,
            Focus::Tone => Focus::Key,
            Focus::List => Focus::Tone,
        }
    }
}

pub struct App {
    pub running: bool,
    /// First Ctrl+C arms the quit, the second one exits
    pub pending_quit: bool,

    pub store: MessageStore,
    pub visible: VisibleController,
    pub narrator: Narrator,
    pub cosmos: Cosmos,

    pub title_input: TextEditor,
    pub text_input: TextEditor,
    pub key_input: TextEditor,
    pub tone: Tone,
    pub focus: Focus,

    /// Index into the display-ordered list
    pub selected_index: usize,
    /// Message the composer was loaded from, target of "update in place"
    pub editing_id: Option<String>,

    pub modal_state: ModalState,
    pub notifications: NotificationQueue,
}

impl App {
    pub fn new(store: MessageStore, narrator: Narrator, cosmos: Cosmos) -> Self {
        Self {
            running: true,
            pending_quit: false,
            store,
            visible: VisibleController::new(),
            narrator,
            cosmos,
            title_input: TextEditor::new(),
            text_input: TextEditor::new(),
            key_input: TextEditor::new(),
            tone: Tone::default(),
            focus: Focus::default(),
            selected_index: 0,
            editing_id: None,
            modal_state: ModalState::None,
            notifications: NotificationQueue::new(),
        }
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    // ===== Composer =====

    /// The form as store input
    pub fn draft(&self) -> NewMessage {
        NewMessage::new(self.text_input.text.clone())
            .title(self.title_input.text.clone())
            .key(self.key_input.text.clone())
            .tone(self.tone.clone())
    }

    pub fn active_editor_mut(&mut self) -> Option<&mut TextEditor> {
        match self.focus {
            Focus::Title => Some(&mut self.title_input),
            Focus::Text => Some(&mut self.text_input),
            Focus::Key => Some(&mut self.key_input),
            Focus::Tone | Focus::List => None,
        }
    }

    pub fn cycle_tone(&mut self) {
        self.tone = self.tone.next();
    }

    pub fn clear_form(&mut self) {
        self.title_input.clear();
        self.text_input.clear();
        self.key_input.clear();
        self.editing_id = None;
    }

    /// Save the form as a new record. Saving a form loaded from an existing
    /// record still creates a new one; `update_message` rewrites in place.
    pub fn save_message(&mut self) {
        if self.text_input.is_empty() {
            self.notify(Notification::info("Write the invisible message."));
            return;
        }
        let draft = self.draft();
        match self.store.create(&draft) {
            Ok(_) => {
                self.clear_form();
                self.selected_index = 0;
                self.notify(Notification::success("Message saved!"));
            }
            Err(e) => {
                tracing::error!("Failed to save message: {}", e);
                self.notify(Notification::error(format!("Could not save message: {}", e)));
            }
        }
    }

    /// Rewrite the record the form was loaded from
    pub fn update_message(&mut self) {
        let Some(id) = self.editing_id.clone() else {
            self.notify(Notification::info("No message loaded for editing."));
            return;
        };
        if self.text_input.is_empty() {
            self.notify(Notification::info("Write the invisible message."));
            return;
        }
        let draft = self.draft();
        match self.store.update(&id, &draft) {
            Ok(_) => {
                self.clear_form();
                self.notify(Notification::success("Message updated."));
            }
            Err(e) => {
                tracing::error!(id = %id, "Failed to update message: {}", e);
                self.notify(Notification::error(format!("Could not update message: {}", e)));
            }
        }
    }

    /// Show the form as an unsaved message
    pub fn promote(&mut self, now: Instant) {
        if self.text_input.is_empty() {
            self.notify(Notification::info("Write the message to manifest."));
            return;
        }
        let mut draft = self.draft();
        if draft.title.trim().is_empty() {
            draft.title = MANIFEST_DEFAULT_TITLE.to_string();
        }
        let message = Message::from_input(&draft, Utc::now());
        self.visible.show(message, now);
    }

    /// Save the form as a "today, not tomorrow" decision and show it
    pub fn carpe(&mut self, now: Instant) {
        if self.text_input.is_empty() {
            self.notify(Notification::info("Nothing to mark as today."));
            return;
        }
        let mut draft = self.draft().carpe(true);
        if draft.title.trim().is_empty() {
            draft.title = CARPE_DEFAULT_TITLE.to_string();
        }
        match self.store.create(&draft) {
            Ok(message) => {
                self.selected_index = 0;
                self.visible.show(message, now);
                self.notify(Notification::success("Marked as \"today, not tomorrow\"!"));
            }
            Err(e) => {
                tracing::error!("Failed to save carpe message: {}", e);
                self.notify(Notification::error(format!("Could not save message: {}", e)));
            }
        }
    }

    // ===== Message list =====

    pub fn messages(&self) -> Vec<&Message> {
        self.store.list()
    }

    pub fn selected_message(&self) -> Option<Message> {
        self.store.list().get(self.selected_index).map(|m| (*m).clone())
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.store.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = self.selected_index.min(self.store.len().saturating_sub(1));
    }

    pub fn show_selected(&mut self, now: Instant) {
        if let Some(message) = self.selected_message() {
            self.visible.show(message, now);
        }
    }

    /// Load the selected record into the form. The record itself is untouched.
    pub fn edit_selected(&mut self) {
        let Some(message) = self.selected_message() else {
            return;
        };
        self.title_input.set_text(&message.title);
        self.text_input.set_text(&message.text);
        self.key_input.set_text(&message.key);
        self.tone = message.tone.clone();
        self.editing_id = Some(message.id);
        self.focus = Focus::Text;
        self.notify(Notification::info("Message loaded for editing."));
    }

    pub fn request_delete_selected(&mut self) {
        if let Some(message) = self.selected_message() {
            self.modal_state = ModalState::ConfirmDelete {
                title: message.list_title().to_string(),
                id: message.id,
            };
        }
    }

    pub fn confirm_delete(&mut self) {
        let ModalState::ConfirmDelete { id, .. } = std::mem::take(&mut self.modal_state) else {
            return;
        };
        match self.store.delete(&id) {
            Ok(Some(_)) => {
                if self.editing_id.as_deref() == Some(id.as_str()) {
                    self.editing_id = None;
                }
                self.clamp_selection();
                self.notify(Notification::info("Message deleted."));
            }
            Ok(None) => {}
            Err(e) => {
                tracing::error!(id = %id, "Failed to delete message: {}", e);
                self.notify(Notification::error(format!("Could not delete message: {}", e)));
            }
        }
    }

    pub fn cancel_modal(&mut self) {
        self.modal_state = ModalState::None;
    }

    // ===== Visible card, help, narration =====

    pub fn dismiss_visible(&mut self) {
        self.visible.dismiss();
    }

    pub fn toggle_help(&mut self) {
        if self.visible.help_open() {
            self.visible.close_help();
        } else {
            self.visible.open_help();
        }
    }

    pub fn toggle_narration(&mut self) {
        if let Err(e) = self.narrator.toggle(self.visible.current()) {
            self.report_narration_error(e);
        }
    }

    pub fn narration_state(&self) -> NarrationState {
        self.narrator.state()
    }

    fn report_narration_error(&mut self, error: NarrationError) {
        let notification = match error {
            NarrationError::NothingVisible => Notification::info(error.to_string()),
            _ => Notification::error(error.to_string()),
        };
        self.notify(notification);
    }

    /// Per-frame update: pulse decay, cosmos clock, toast expiry, speech status
    pub fn tick(&mut self, now: Instant) {
        self.visible.tick(now);
        self.cosmos.advance();
        self.notifications.tick(now);
        if let Some(error) = self.narrator.poll() {
            self.report_narration_error(error);
        }
    }

    pub fn quit(&mut self) {
        self.narrator.stop();
        self.running = false;
    }
}
