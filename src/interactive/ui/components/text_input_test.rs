use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::text_input::TextInput;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

#[test]
fn typing_appends_at_the_cursor() {
    let mut input = TextInput::new();

    assert!(input.handle_key(key(KeyCode::Char('a'))));
    assert!(input.handle_key(key(KeyCode::Char('b'))));
    assert_eq!(input.value(), "ab");

    input.handle_key(key(KeyCode::Home));
    assert!(input.handle_key(key(KeyCode::Char('X'))));
    assert_eq!(input.value(), "Xab");
}

#[test]
fn backspace_and_delete() {
    let mut input = TextInput::new();
    input.set_value("abc".to_string());

    assert!(input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.value(), "ab");

    input.handle_key(key(KeyCode::Home));
    assert!(input.handle_key(key(KeyCode::Delete)));
    assert_eq!(input.value(), "b");

    // At the boundaries both are no-ops.
    input.handle_key(key(KeyCode::End));
    assert!(!input.handle_key(key(KeyCode::Delete)));
    input.handle_key(key(KeyCode::Home));
    assert!(!input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.value(), "b");
}

#[test]
fn multibyte_input_is_handled_per_char() {
    let mut input = TextInput::new();
    for c in "könig".chars() {
        input.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(input.value(), "könig");

    input.handle_key(key(KeyCode::Backspace));
    assert_eq!(input.value(), "köni");
}

#[test]
fn ctrl_u_kills_to_line_start() {
    let mut input = TextInput::new();
    input.set_value("sender abc".to_string());

    assert!(input.handle_key(ctrl('u')));
    assert_eq!(input.value(), "");
}

#[test]
fn ctrl_w_deletes_the_previous_word() {
    let mut input = TextInput::new();
    input.set_value("erstes zweites".to_string());

    assert!(input.handle_key(ctrl('w')));
    assert_eq!(input.value(), "erstes ");

    assert!(input.handle_key(ctrl('w')));
    assert_eq!(input.value(), "");
}

#[test]
fn ctrl_k_kills_to_line_end() {
    let mut input = TextInput::new();
    input.set_value("abcdef".to_string());
    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Right));

    assert!(input.handle_key(ctrl('k')));
    assert_eq!(input.value(), "a");
}

#[test]
fn cursor_movement_does_not_change_the_value() {
    let mut input = TextInput::new();
    input.set_value("abc".to_string());

    assert!(!input.handle_key(key(KeyCode::Left)));
    assert!(!input.handle_key(key(KeyCode::Right)));
    assert!(!input.handle_key(ctrl('a')));
    assert!(!input.handle_key(ctrl('e')));
    assert_eq!(input.value(), "abc");
}
