use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::carousel::CarouselIntent;
use crate::ui::view::{ViewIntent, ViewState};

/// Map a key press to the controller that owns the affected state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }
    if !is_plain(key) {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch @ '1'..='3') => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            if let Some(view) = ViewState::from_index(index) {
                app.select_view(view);
            }
        }
        KeyCode::Tab => app.dispatch_view(ViewIntent::Next),
        KeyCode::BackTab => app.dispatch_view(ViewIntent::Previous),
        KeyCode::Right | KeyCode::Char('l') => app.dispatch_carousel(CarouselIntent::Next),
        KeyCode::Left | KeyCode::Char('h') => app.dispatch_carousel(CarouselIntent::Previous),
        KeyCode::Char(' ') | KeyCode::Char('+') | KeyCode::Enter => app.like(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// No Ctrl or Alt held. Shift is part of typing `Q`, `+` or BackTab.
fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> App {
        App::new(ContentStore::embedded())
    }

    #[test]
    fn number_keys_select_views() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.view(), ViewState::Facts);
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.view(), ViewState::Care);
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.view(), ViewState::Breeds);
    }

    #[test]
    fn tab_cycles_views() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.view(), ViewState::Care);
        handle_key(&mut app, press(KeyCode::BackTab));
        handle_key(&mut app, press(KeyCode::BackTab));
        assert_eq!(app.view(), ViewState::Facts);
    }

    #[test]
    fn space_and_enter_like() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char(' ')));
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Char('+')));
        assert_eq!(app.likes().get(), 3);
    }

    #[test]
    fn arrows_move_carousel() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.carousel().index(), 1);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = make_app();
        let mut key = press(KeyCode::Char(' '));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.likes().get(), 0);
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = make_app();
            handle_key(&mut app, press(code));
            assert!(app.should_quit());
        }

        let mut app = make_app();
        let mut ctrl_c = press(KeyCode::Char('c'));
        ctrl_c.modifiers = KeyModifiers::CONTROL;
        handle_key(&mut app, ctrl_c);
        assert!(app.should_quit());
    }

    #[test]
    fn modified_keys_do_not_act() {
        let mut app = make_app();
        for (code, modifiers) in [
            (KeyCode::Char('l'), KeyModifiers::CONTROL),
            (KeyCode::Right, KeyModifiers::ALT),
            (KeyCode::Char('3'), KeyModifiers::CONTROL),
            (KeyCode::Char(' '), KeyModifiers::ALT),
            (KeyCode::Char('q'), KeyModifiers::CONTROL),
        ] {
            let mut key = press(code);
            key.modifiers = modifiers;
            handle_key(&mut app, key);
        }
        assert_eq!(app.carousel().index(), 0);
        assert_eq!(app.view(), ViewState::Breeds);
        assert_eq!(app.likes().get(), 0);
        assert!(!app.should_quit());
    }

    #[test]
    fn shifted_keys_still_act() {
        let mut app = make_app();
        let mut back_tab = press(KeyCode::BackTab);
        back_tab.modifiers = KeyModifiers::SHIFT;
        handle_key(&mut app, back_tab);
        assert_eq!(app.view(), ViewState::Facts);

        let mut plus = press(KeyCode::Char('+'));
        plus.modifiers = KeyModifiers::SHIFT;
        handle_key(&mut app, plus);
        assert_eq!(app.likes().get(), 1);
    }

    #[test]
    fn unbound_keys_change_nothing() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('z')));
        assert_eq!(app.view(), ViewState::Breeds);
        assert_eq!(app.likes().get(), 0);
        assert!(!app.should_quit());
    }
}
