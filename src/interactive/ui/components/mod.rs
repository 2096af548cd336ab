pub mod file_table;
pub mod help_dialog;
pub mod media_table;
pub mod message_bar;
pub mod search_form;
pub mod status_view;
pub mod tab_bar;
pub mod text_input;

#[cfg(test)]
mod media_table_test;
#[cfg(test)]
mod message_bar_test;
#[cfg(test)]
mod text_input_test;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::interactive::ui::events::Message;

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}
