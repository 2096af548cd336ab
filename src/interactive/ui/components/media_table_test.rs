use std::collections::BTreeSet;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::Component;
use super::media_table::{MediaTable, MediaTableKind};
use crate::interactive::ui::events::Message;
use crate::schemas::MediaRow;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: crossterm::event::KeyEventKind::Press,
        state: crossterm::event::KeyEventState::empty(),
    }
}

fn row(id: &str, title: &str) -> MediaRow {
    MediaRow {
        id: id.to_string(),
        title: title.to_string(),
        sender: "ARD".to_string(),
        topic: "Krimi".to_string(),
        date: "01.01.24".to_string(),
        ..MediaRow::default()
    }
}

fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
    let content = buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>();
    content.contains(text)
}

#[test]
fn navigation_and_marking_translate_to_messages() {
    let mut table = MediaTable::new(MediaTableKind::Results);

    assert!(matches!(
        table.handle_key(key(KeyCode::Up)),
        Some(Message::SelectUp)
    ));
    assert!(matches!(
        table.handle_key(key(KeyCode::Down)),
        Some(Message::SelectDown)
    ));
    assert!(matches!(
        table.handle_key(key(KeyCode::Char(' '))),
        Some(Message::ToggleMark)
    ));
}

#[test]
fn enter_queues_only_in_the_results_table() {
    let mut results = MediaTable::new(MediaTableKind::Results);
    assert!(matches!(
        results.handle_key(key(KeyCode::Enter)),
        Some(Message::QueueSelectionRequested)
    ));

    let mut queue = MediaTable::new(MediaTableKind::Queue);
    assert!(queue.handle_key(key(KeyCode::Enter)).is_none());
}

#[test]
fn delete_and_reload_only_in_the_queue_table() {
    let mut queue = MediaTable::new(MediaTableKind::Queue);
    assert!(matches!(
        queue.handle_key(key(KeyCode::Char('x'))),
        Some(Message::DeleteQueuedRequested)
    ));
    assert!(matches!(
        queue.handle_key(key(KeyCode::Char('r'))),
        Some(Message::OpenQueue)
    ));

    let mut results = MediaTable::new(MediaTableKind::Results);
    assert!(results.handle_key(key(KeyCode::Char('x'))).is_none());
    assert!(results.handle_key(key(KeyCode::Char('r'))).is_none());
}

#[test]
fn renders_rows_and_count() {
    let backend = TestBackend::new(80, 12);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut table = MediaTable::new(MediaTableKind::Results);
    table.set_rows(vec![row("1", "Tagesschau"), row("2", "Sportschau")]);
    table.set_cursor(0);
    table.set_marked(BTreeSet::from([1]));

    terminal.draw(|f| table.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    assert!(buffer_contains_text(buffer, "Filme (2)"));
    assert!(buffer_contains_text(buffer, "Tagesschau"));
    assert!(buffer_contains_text(buffer, "Sportschau"));
    assert!(buffer_contains_text(buffer, "●"));
}

#[test]
fn renders_empty_state() {
    let backend = TestBackend::new(60, 8);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut table = MediaTable::new(MediaTableKind::Queue);
    terminal.draw(|f| table.render(f, f.area())).unwrap();

    let buffer = terminal.backend().buffer();
    assert!(buffer_contains_text(buffer, "Liste (0)"));
    assert!(buffer_contains_text(buffer, "Keine Einträge"));
}
