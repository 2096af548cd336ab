//! The interactive console: a five-panel terminal UI over the api
//! worker. The UI thread owns all state; the worker owns the HTTP
//! clients; they talk over mpsc channels, one request per command and
//! one message per completion.

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::api::{ApiClient, SystemControl};

mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::api_service::ApiService;
use self::constants::{DOUBLE_CTRL_C_WINDOW_MS, POLL_INTERVAL_MS};
use self::domain::models::{ApiRequest, ApiResponse, Panel};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub struct ConsoleOptions {
    pub api: ApiClient,
    pub system: SystemControl,
    pub download_dir: PathBuf,
}

pub struct InteractiveConsole {
    state: AppState,
    renderer: Renderer,
    service: Arc<ApiService>,
    request_tx: Option<Sender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
    next_search_id: u64,
    download_dir: PathBuf,
    last_ctrl_c_press: Option<Instant>,
}

impl InteractiveConsole {
    pub fn new(options: ConsoleOptions) -> Self {
        let service = Arc::new(ApiService::new(options.api, options.system));
        Self {
            state: AppState::new(),
            renderer: Renderer::new(),
            service,
            request_tx: None,
            response_rx: None,
            next_search_id: 0,
            download_dir: options.download_dir,
            last_ctrl_c_press: None,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        let (tx, rx) = self.start_api_worker();
        self.request_tx = Some(tx);
        self.response_rx = Some(rx);

        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state);
            })?;

            // Worker completions since the last tick.
            let mut completions = Vec::new();
            if let Some(receiver) = &self.response_rx {
                while let Ok(response) = receiver.try_recv() {
                    completions.push(response_to_message(response));
                }
            }
            for message in completions {
                self.handle_message(message);
            }

            self.state.clear_expired_message(Instant::now());

            if poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key)? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Double Ctrl+C quits from anywhere, including mid-edit.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_millis(DOUBLE_CTRL_C_WINDOW_MS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.state.show_message("Press Ctrl+C again to exit");
            return Ok(false);
        }

        if self.state.help_visible {
            if let Some(message) = self.renderer.get_help_dialog_mut().handle_key(key) {
                self.handle_message(message);
            }
            return Ok(false);
        }

        // Global keys. '?' wins over the form, so it cannot be typed
        // into a search field.
        let global = match key.code {
            KeyCode::F(1) => Some(Message::ShowPanel(Panel::Search)),
            KeyCode::F(2) => Some(Message::ShowPanel(Panel::Results)),
            KeyCode::F(3) => Some(Message::OpenQueue),
            KeyCode::F(4) => Some(Message::OpenFiles),
            KeyCode::F(5) => Some(Message::OpenStatus),
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') if self.state.panel != Panel::Search => return Ok(true),
            _ => None,
        };
        if let Some(message) = global {
            self.handle_message(message);
            return Ok(false);
        }

        let message = match self.state.panel {
            Panel::Search => self.renderer.get_search_form_mut().handle_key(key),
            Panel::Results => self.renderer.get_results_table_mut().handle_key(key),
            Panel::Queue => self.renderer.get_queue_table_mut().handle_key(key),
            Panel::Files => self.renderer.get_file_table_mut().handle_key(key),
            Panel::Status => self.renderer.get_status_view_mut().handle_key(key),
        };
        if let Some(message) = message {
            self.handle_message(message);
        }
        Ok(false)
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        let request = match command {
            Command::None => return,
            Command::ExecuteSearch => {
                self.next_search_id += 1;
                self.state.search.current_search_id = self.next_search_id;
                ApiRequest::Search {
                    id: self.next_search_id,
                    criteria: self.state.search.criteria.clone(),
                }
            }
            Command::RefreshIndex => ApiRequest::RefreshIndex,
            Command::QueueSelection { ids, dates } => ApiRequest::QueueSelection { ids, dates },
            Command::LoadQueue => ApiRequest::ListQueue,
            Command::DeleteQueued { ids } => ApiRequest::DeleteQueued { ids },
            Command::LoadFiles => ApiRequest::ListFiles,
            Command::StartDownloads => ApiRequest::StartDownloads,
            Command::DeleteFile { path } => ApiRequest::DeleteFile { path },
            Command::FetchFile { path } => ApiRequest::FetchFile {
                path,
                dest_dir: self.download_dir.clone(),
            },
            Command::LoadStatus => ApiRequest::LoadStatus,
            Command::Shutdown => ApiRequest::Shutdown,
            Command::Reboot => ApiRequest::Reboot,
        };
        if let Some(sender) = &self.request_tx {
            let _ = sender.send(request);
        }
    }

    fn start_api_worker(&self) -> (Sender<ApiRequest>, Receiver<ApiResponse>) {
        let (request_tx, request_rx) = mpsc::channel::<ApiRequest>();
        let (response_tx, response_rx) = mpsc::channel::<ApiResponse>();
        let service = self.service.clone();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                if let Some(response) = service.execute(request) {
                    let _ = response_tx.send(response);
                }
            }
        });

        (request_tx, response_rx)
    }
}

fn response_to_message(response: ApiResponse) -> Message {
    match response {
        ApiResponse::Search { id, outcome } => Message::SearchCompleted(id, outcome),
        ApiResponse::QueueLoaded(outcome) => Message::QueueLoaded(outcome),
        ApiResponse::FilesLoaded(outcome) => Message::FilesLoaded(outcome),
        ApiResponse::StatusLoaded(outcome) => Message::StatusLoaded(outcome),
        ApiResponse::FetchedFile(outcome) => Message::FetchFileCompleted(outcome),
        ApiResponse::Action(kind, outcome) => Message::ActionCompleted(kind, outcome),
    }
}
