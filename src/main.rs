use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use lineupcli::{cli, config, error};

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
    /// Serve the report endpoint over HTTP
    Serve,

    /// Find lineup artists in a user's playlists
    Artists(ArtistsOptions),

    /// Handle the festival lineup
    Lineup(LineupOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Spotify username whose playlists are scanned
    pub username: String,

    /// Report all artists instead of only lineup matches
    #[clap(long)]
    pub all: bool,

    /// Print the report as JSON instead of a table
    #[clap(long)]
    pub json: bool,

    /// Print the cached report without contacting Spotify
    #[clap(long)]
    pub cached: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LineupOptions {
    /// Subcommands under `lineup` (e.g., `update`)
    #[command(subcommand)]
    pub command: Option<LineupSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LineupSubcommand {
    /// Resolve lineup names to Spotify ids and rewrite the lineup file
    Update,
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
        Command::Serve => cli::serve().await,

        Command::Artists(opt) => {
            cli::find_artists(opt.username, opt.all, opt.json, opt.cached).await
        }

        Command::Lineup(opt) => match opt.command {
            Some(LineupSubcommand::Update) => cli::update_lineup().await,
            None => cli::list_lineup().await,
        },

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
