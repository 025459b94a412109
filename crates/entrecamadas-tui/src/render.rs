use entrecamadas_core::Visibility;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::render_statusbar;
use crate::ui::layout::{self, COMPOSER_HEIGHT, SIDEBAR_WIDTH, STATUSBAR_HEIGHT};
use crate::ui::modal::ModalState;
use crate::ui::views::{
    render_composer, render_confirm_delete, render_help, render_message_list,
    render_visible_card, CosmosWidget,
};
use crate::ui::{theme, App};

pub fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let [main, statusbar] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUSBAR_HEIGHT)])
            .areas(f.area());

    let sidebar_width = SIDEBAR_WIDTH.min(main.width / 2);
    let [sidebar, sky] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(main);

    let [composer, list] =
        Layout::vertical([Constraint::Length(COMPOSER_HEIGHT), Constraint::Min(0)])
            .areas(sidebar);

    // Cosmos first, card or help on top of it
    f.render_widget(
        CosmosWidget::new(&app.cosmos, app.visible.pulse().value()),
        sky,
    );
    let overlay_area = layout::with_padding(sky, layout::CONTENT_PADDING_H);
    match app.visible.visibility() {
        Visibility::Help => render_help(f, overlay_area),
        Visibility::Showing(message) => {
            render_visible_card(f, message, app.narration_state(), overlay_area)
        }
        Visibility::Hidden => {}
    }

    render_composer(f, app, composer);
    render_message_list(f, app, list);
    render_statusbar(f, app, statusbar);

    if let ModalState::ConfirmDelete { title, .. } = &app.modal_state {
        render_confirm_delete(f, title, f.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::SystemSpeech;
    use entrecamadas_core::{Cosmos, MemorySlot, MessageStore, Narrator};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn app() -> App {
        let store = MessageStore::open(Box::new(MemorySlot::new()));
        let narrator = Narrator::new(Box::new(SystemSpeech::disabled()));
        App::new(store, narrator, Cosmos::with_seed(11))
    }

    fn screen(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_main_screen() {
        let app = app();
        let text = screen(&app, 120, 40);
        assert!(text.contains("New message"));
        assert!(text.contains("Messages (1)"));
        assert!(text.contains("Telepathic network"));
    }

    #[test]
    fn test_visible_card_shows_narration_label() {
        let mut app = app();
        app.show_selected(Instant::now());
        let text = screen(&app, 120, 40);
        assert!(text.contains("Narrate"));
        assert!(text.contains("flower"));
    }

    #[test]
    fn test_confirm_dialog() {
        let mut app = app();
        app.request_delete_selected();
        let text = screen(&app, 120, 40);
        assert!(text.contains("Delete this message?"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.show_selected(Instant::now());
        screen(&app, 3, 2);
        app.toggle_help();
        screen(&app, 10, 5);
    }
}
