use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use exitspotify::{cli, config, error, playlist::FilterColumn};

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
    /// Show the tracks of a playlist
    Tracks(TracksOptions),

    /// Show totals and the most frequent artists of a playlist
    Stats(StatsOptions),

    /// Export a playlist as CSV
    Export(ExportOptions),

    /// Run the local HTTP service
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    /// Playlist link, URI or 22 character ID
    pub reference: String,

    /// Only show tracks containing this text (case-insensitive)
    #[clap(long)]
    pub filter: Option<String>,

    /// Column the filter applies to
    #[clap(long, value_enum, default_value_t = FilterColumn::All)]
    pub column: FilterColumn,
}

#[derive(Parser, Debug, Clone)]
pub struct StatsOptions {
    /// Playlist link, URI or 22 character ID
    pub reference: String,

    /// Number of artists to rank
    #[clap(long, default_value_t = 15)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Playlist link, URI or 22 character ID
    pub reference: String,

    /// Target file (defaults to <playlist_name>.csv)
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Tracks(opt) => cli::tracks(opt.reference, opt.filter, opt.column).await,
        Command::Stats(opt) => cli::stats(opt.reference, opt.limit).await,
        Command::Export(opt) => cli::export(opt.reference, opt.output).await,
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
