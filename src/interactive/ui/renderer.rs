use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::interactive::domain::models::Panel;
use crate::interactive::ui::app_state::AppState;
use crate::interactive::ui::components::{
    Component, file_table::FileTable, help_dialog::HelpDialog,
    media_table::{MediaTable, MediaTableKind}, message_bar::MessageBar,
    search_form::SearchForm, status_view::StatusView, tab_bar::TabBar,
};

/// Owns the components and draws the frame: tab bar, exactly one content
/// panel, message bar, optionally the help overlay on top.
pub struct Renderer {
    tab_bar: TabBar,
    search_form: SearchForm,
    results_table: MediaTable,
    queue_table: MediaTable,
    file_table: FileTable,
    status_view: StatusView,
    message_bar: MessageBar,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            tab_bar: TabBar::new(),
            search_form: SearchForm::new(),
            results_table: MediaTable::new(MediaTableKind::Results),
            queue_table: MediaTable::new(MediaTableKind::Queue),
            file_table: FileTable::new(),
            status_view: StatusView::new(),
            message_bar: MessageBar::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // tab bar
                Constraint::Min(0),    // active panel
                Constraint::Length(1), // message bar
            ])
            .split(f.area());

        self.tab_bar.set_active(state.panel);
        self.tab_bar.render(f, chunks[0]);

        match state.panel {
            Panel::Search => {
                self.search_form.sync_criteria(&state.search.criteria);
                self.search_form.set_searching(state.search.is_searching);
                self.search_form.render(f, chunks[1]);
            }
            Panel::Results => {
                self.results_table.set_rows(state.results.rows.clone());
                self.results_table.set_cursor(state.results.cursor);
                self.results_table.set_marked(state.results.marked.clone());
                self.results_table.set_loading(state.search.is_searching);
                self.results_table.render(f, chunks[1]);
            }
            Panel::Queue => {
                self.queue_table.set_rows(state.queue.rows.clone());
                self.queue_table.set_cursor(state.queue.cursor);
                self.queue_table.set_marked(state.queue.marked.clone());
                self.queue_table.set_loading(state.queue.is_loading);
                self.queue_table.render(f, chunks[1]);
            }
            Panel::Files => {
                self.file_table.set_rows(state.files.rows.clone());
                self.file_table.set_cursor(state.files.cursor);
                self.file_table.set_loading(state.files.is_loading);
                self.file_table.render(f, chunks[1]);
            }
            Panel::Status => {
                self.status_view.set_report(state.status.report.clone());
                self.status_view.set_loading(state.status.is_loading);
                self.status_view.render(f, chunks[1]);
            }
        }

        self.message_bar
            .set_message(state.ui.message().map(str::to_string));
        self.message_bar.render(f, chunks[2]);

        if state.help_visible {
            self.help_dialog.render(f, f.area());
        }
    }

    pub fn get_search_form_mut(&mut self) -> &mut SearchForm {
        &mut self.search_form
    }

    pub fn get_results_table_mut(&mut self) -> &mut MediaTable {
        &mut self.results_table
    }

    pub fn get_queue_table_mut(&mut self) -> &mut MediaTable {
        &mut self.queue_table
    }

    pub fn get_file_table_mut(&mut self) -> &mut FileTable {
        &mut self.file_table
    }

    pub fn get_status_view_mut(&mut self) -> &mut StatusView {
        &mut self.status_view
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
