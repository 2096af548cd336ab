use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

use super::Component;
use super::message_bar::MessageBar;

fn buffer_contains_text(buffer: &Buffer, text: &str) -> bool {
    let content = buffer
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>();
    content.contains(text)
}

#[test]
fn renders_the_live_message() {
    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut bar = MessageBar::new();
    bar.set_message(Some("Aktualisierung angestoßen".to_string()));

    terminal.draw(|f| bar.render(f, f.area())).unwrap();

    assert!(buffer_contains_text(
        terminal.backend().buffer(),
        "Aktualisierung angestoßen"
    ));
}

#[test]
fn renders_nothing_once_cleared() {
    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    let mut bar = MessageBar::new();
    bar.set_message(Some("weg damit".to_string()));
    terminal.draw(|f| bar.render(f, f.area())).unwrap();

    bar.set_message(None);
    terminal.draw(|f| bar.render(f, f.area())).unwrap();

    assert!(!buffer_contains_text(terminal.backend().buffer(), "weg damit"));
}
