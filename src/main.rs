use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spopcli::{cli, config, error};

/// Curated playlist scanned when no `--playlist` flag is given.
const DEFAULT_PLAYLIST: &str = "37i9dQZF1DX3QbJYj9DkHB";

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Verify Spotify API credentials
    Auth,

    /// Rank a playlist's artists by popularity
    Chart(ChartOptions),

    /// Show detail for one artist of a playlist
    Artist(ArtistOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ChartOptions {
    /// Playlist to scan
    #[clap(long, default_value = DEFAULT_PLAYLIST)]
    pub playlist: String,

    /// Number of top artists to display
    #[clap(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(5..=30))]
    pub top: u32,

    /// Maximum number of playlist pages to fetch
    #[clap(long, default_value_t = 50)]
    pub max_pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    /// Artist name as it appears in the playlist
    pub name: String,

    /// Playlist to scan
    #[clap(long, default_value = DEFAULT_PLAYLIST)]
    pub playlist: String,

    /// Maximum number of playlist pages to fetch
    #[clap(long, default_value_t = 50)]
    pub max_pages: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Chart(opt) => cli::chart(opt.playlist, opt.top as usize, opt.max_pages).await,
        Command::Artist(opt) => cli::artist(opt.name, opt.playlist, opt.max_pages).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
