use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::ProgressBar;
use mtv_remote::api::{ApiClient, SystemControl};
use mtv_remote::interactive::{ConsoleOptions, InteractiveConsole};
use mtv_remote::logging;
use mtv_remote::output::{self, OutputFormat};
use mtv_remote::schemas::{SearchCriteria, some_nonempty};

#[derive(Parser)]
#[command(
    name = "mtv-remote",
    version,
    about = "Terminal remote console for mtv_cli video recorder servers",
    long_about = None
)]
struct Cli {
    /// Search the film index (matched against all fields)
    query: Option<String>,

    /// Base URL of the recorder's web interface
    #[arg(short, long, env = "MTV_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Directory fetched files are saved to (default: the download directory)
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Restrict a search to one station
    #[arg(long)]
    sender: Option<String>,

    /// Restrict a search to one topic
    #[arg(long)]
    thema: Option<String>,

    /// Restrict a search to one broadcast date (dd.mm.yyyy)
    #[arg(long)]
    datum: Option<String>,

    /// Restrict a search to words in the title
    #[arg(long)]
    titel: Option<String>,

    /// Restrict a search to words in the description
    #[arg(long)]
    beschreibung: Option<String>,

    /// Show the server status
    #[arg(long)]
    status: bool,

    /// Ask the server to refresh its film index
    #[arg(long)]
    update: bool,

    /// List the queued downloads
    #[arg(long)]
    downloads: bool,

    /// List the recorded files
    #[arg(long)]
    files: bool,

    /// Start downloading everything queued on the server
    #[arg(long)]
    start_downloads: bool,

    /// Fetch one recorded file (server-side path, see --files)
    #[arg(long, value_name = "DATEINAME")]
    fetch: Option<String>,

    /// Shut the recorder system down
    #[arg(long)]
    shutdown: bool,

    /// Reboot the recorder system
    #[arg(long)]
    reboot: bool,

    /// Output format for one-shot actions
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Interactive console (the default when no action is given)
    #[arg(short, long)]
    interactive: bool,
}

impl Cli {
    fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            global: self.query.clone().and_then(some_nonempty),
            sender: self.sender.clone().and_then(some_nonempty),
            thema: self.thema.clone().and_then(some_nonempty),
            datum: self.datum.clone().and_then(some_nonempty),
            titel: self.titel.clone().and_then(some_nonempty),
            beschreibung: self.beschreibung.clone().and_then(some_nonempty),
        }
    }

    fn wants_search(&self) -> bool {
        self.query.is_some()
            || self.sender.is_some()
            || self.thema.is_some()
            || self.datum.is_some()
            || self.titel.is_some()
            || self.beschreibung.is_some()
    }

    fn wants_one_shot(&self) -> bool {
        self.wants_search()
            || self.status
            || self.update
            || self.downloads
            || self.files
            || self.start_downloads
            || self.fetch.is_some()
            || self.shutdown
            || self.reboot
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let timeout = Duration::from_secs(cli.timeout);
    let api = ApiClient::new(&cli.url, timeout)?;
    let system = SystemControl::new(&cli.url, timeout)?;
    let download_dir = cli
        .download_dir
        .clone()
        .or_else(dirs::download_dir)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    if cli.interactive || !cli.wants_one_shot() {
        let mut console = InteractiveConsole::new(ConsoleOptions {
            api,
            system,
            download_dir,
        });
        return console.run();
    }

    if cli.status {
        output::print_status(&api.status()?, cli.format)?;
    }
    if cli.update {
        output::print_msg(&api.refresh_index()?, cli.format)?;
    }
    if cli.downloads {
        output::print_media_rows(&api.list_queued()?, cli.format)?;
    }
    if cli.files {
        output::print_file_rows(&api.list_files()?, cli.format)?;
    }
    if cli.start_downloads {
        output::print_msg(&api.start_downloads()?, cli.format)?;
    }
    if let Some(name) = &cli.fetch {
        fetch_with_spinner(&api, name, &download_dir)?;
    }
    if cli.wants_search() {
        output::print_media_rows(&api.search(&cli.criteria())?, cli.format)?;
    }
    if cli.shutdown {
        system.shutdown()?;
        println!("Shutting the system down...");
    }
    if cli.reboot {
        system.reboot()?;
        println!("Rebooting the system...");
    }

    Ok(())
}

fn fetch_with_spinner(api: &ApiClient, name: &str, download_dir: &std::path::Path) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(format!("Lade {name} ..."));

    let outcome = api.fetch_file(name, download_dir);
    spinner.finish_and_clear();

    let (path, bytes) = outcome?;
    println!("{} ({bytes} Bytes)", path.display());
    Ok(())
}
