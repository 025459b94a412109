use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::ui::{App, Focus, ModalState};

/// Route one key press. Ctrl+C is handled by the event loop.
pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if app.modal_state != ModalState::None {
        handle_modal_key(app, key);
        return;
    }

    if handle_global_key(app, key, now) {
        return;
    }

    match app.focus {
        Focus::List => handle_list_key(app, key, now),
        Focus::Tone => handle_tone_key(app, key),
        Focus::Title | Focus::Text | Focus::Key => handle_editor_key(app, key),
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    match app.modal_state {
        ModalState::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_modal(),
            _ => {}
        },
        ModalState::None => {}
    }
}

/// Keys that work regardless of focus. Returns true when consumed.
fn handle_global_key(app: &mut App, key: KeyEvent, now: Instant) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('s') => app.save_message(),
            KeyCode::Char('u') => app.update_message(),
            KeyCode::Char('p') => app.promote(now),
            KeyCode::Char('t') => app.carpe(now),
            KeyCode::Char('n') => app.toggle_narration(),
            _ => return false,
        }
        return true;
    }

    match key.code {
        KeyCode::F(1) => app.toggle_help(),
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Esc => {
            if app.visible.help_open() {
                app.visible.close_help();
            } else if app.visible.current().is_some() {
                app.dismiss_visible();
            } else if app.notifications.current().is_some() {
                app.notifications.dismiss();
            } else {
                return false;
            }
        }
        _ => return false,
    }
    true
}

fn handle_list_key(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Enter | KeyCode::Char('v') => app.show_selected(now),
        KeyCode::Char('e') => app.edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('n') => app.toggle_narration(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

fn handle_tone_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => app.cycle_tone(),
        KeyCode::Left | KeyCode::Char('h') => app.tone = app.tone.prev(),
        KeyCode::Enter => app.focus = app.focus.next(),
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let multiline = app.focus == Focus::Text;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if key.code == KeyCode::Enter && !multiline {
        app.focus = app.focus.next();
        return;
    }

    let Some(editor) = app.active_editor_mut() else {
        return;
    };
    match key.code {
        KeyCode::Char('a') if ctrl => editor.move_to_line_start(),
        KeyCode::Char('e') if ctrl => editor.move_to_line_end(),
        KeyCode::Char(c) if !ctrl => editor.insert_char(c),
        KeyCode::Enter => editor.insert_newline(),
        KeyCode::Backspace => editor.delete_char_before(),
        KeyCode::Delete => editor.delete_char_at(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Home => editor.move_to_line_start(),
        KeyCode::End => editor.move_to_line_end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::SystemSpeech;
    use entrecamadas_core::{Cosmos, MemorySlot, MessageStore, Narrator, Tone};

    fn app() -> App {
        let store = MessageStore::open(Box::new(MemorySlot::new()));
        let narrator = Narrator::new(Box::new(SystemSpeech::disabled()));
        App::new(store, narrator, Cosmos::with_seed(3))
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(
            app,
            KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL),
            Instant::now(),
        );
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut app = app();
        type_str(&mut app, "hello");
        press(&mut app, KeyCode::Enter);
        type_str(&mut app, "world");
        assert_eq!(app.text_input.text, "hello\nworld");

        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Title);
        type_str(&mut app, "T");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.title_input.text, "T");
        assert_eq!(app.focus, Focus::Text);
    }

    #[test]
    fn test_ctrl_s_saves() {
        let mut app = app();
        type_str(&mut app, "note");
        ctrl(&mut app, 's');
        assert_eq!(app.store.len(), 2);
        assert!(app.text_input.text.is_empty());
    }

    #[test]
    fn test_list_keys_do_not_type() {
        let mut app = app();
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('v'));
        assert!(app.visible.current().is_some());
        assert!(app.text_input.text.is_empty());

        press(&mut app, KeyCode::Esc);
        assert!(app.visible.current().is_none());
    }

    #[test]
    fn test_delete_flow_through_modal() {
        let mut app = app();
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('d'));
        // Keys other than y/n are swallowed by the dialog
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_tone_field_cycles() {
        let mut app = app();
        app.focus = Focus::Tone;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.tone, Tone::Mystical);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.tone, Tone::Contemplative);
    }

    #[test]
    fn test_f1_toggles_help_and_esc_closes() {
        let mut app = app();
        press(&mut app, KeyCode::F(1));
        assert!(app.visible.help_open());
        press(&mut app, KeyCode::Esc);
        assert!(!app.visible.help_open());
    }

    #[test]
    fn test_esc_clears_notice_once_overlays_are_gone() {
        let mut app = app();
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('v'));
        ctrl(&mut app, 's');
        assert!(app.notifications.current().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.visible.current().is_none());
        assert!(app.notifications.current().is_some());

        press(&mut app, KeyCode::Esc);
        assert!(app.notifications.is_empty());
    }

    #[test]
    fn test_q_quits_from_list_only() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.text_input.text, "q");

        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
