mod command;
mod render;

use std::io::{self, BufRead, Write};

use clap::Parser;
use color_eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uno_engine::{
    config::GameConfig,
    constants::{MAX_PLAYERS, MIN_PLAYERS},
    uno::Uno,
};

use command::{Command, ResolveCommandResult};

/// Hot-seat UNO in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Player names in seating order. The first player deals.
    #[arg(required = true, num_args = MIN_PLAYERS..=MAX_PLAYERS)]
    players: Vec<String>,

    /// Seed for every shuffle of the match.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. `uno_engine=debug`. Falls back to `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let config = GameConfig { seed: args.seed };
    let mut game = Uno::with_config(args.players, config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}\n", command::help_text())?;

    loop {
        let snapshot = game.get_snapshot();
        writeln!(stdout, "\n{}", render::render_table(&snapshot))?;
        write!(stdout, "{}> ", snapshot.active_player)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            info!("input closed");
            return Ok(());
        }

        let (text, declared_uno) = match Command::parse(&line) {
            None => continue,
            Some(Command::Quit) => return Ok(()),
            Some(Command::Help) => {
                writeln!(stdout, "{}", command::help_text())?;
                continue;
            }
            Some(Command::Play { text, declared_uno }) => (text, declared_uno),
            Some(Command::PlayIndex {
                index,
                color,
                declared_uno,
            }) => match Command::resolve_index(snapshot.active_hand(), index, color) {
                ResolveCommandResult::Move(text) => (text, declared_uno),
                ResolveCommandResult::NoSuchCard(index) => {
                    writeln!(stdout, "You have no card #{index}.")?;
                    continue;
                }
                ResolveCommandResult::ColorNeeded(card) => {
                    writeln!(stdout, "Say which color to play {card} as, e.g. `#{index} red`.")?;
                    continue;
                }
            },
        };

        let result = game.submit_move(&text, declared_uno);
        if !result.is_success() {
            info!(player = %snapshot.active_player, input = %text, "invalid move");
        }
        writeln!(
            stdout,
            "{}",
            render::render_result(&snapshot.active_player, &result)
        )?;

        if let Some(winner) = game.check_win() {
            writeln!(stdout, "\n{winner} has no cards left and wins the match!")?;
            info!(winner, "match finished");
            return Ok(());
        }
    }
}
