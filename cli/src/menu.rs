use std::io::{BufRead, Write};
use std::time::Instant;

use chrono::Local;
use sweeper_core::{GameConfig, Session};

use crate::console::Console;
use crate::play::{SessionEnd, play};
use crate::prompt;
use crate::stats::{self, ResultRecord, StatsStore};

pub struct App {
    store: StatsStore,
    seed: Option<u64>,
    /// Used for the first game instead of asking, consumed once played.
    preset: Option<GameConfig>,
}

impl App {
    pub fn new(store: StatsStore, seed: Option<u64>, preset: Option<GameConfig>) -> Self {
        Self {
            store,
            seed,
            preset,
        }
    }

    fn next_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

enum Choice {
    NewGame,
    Statistics,
    Quit,
    Unknown,
}

fn choose<R: BufRead, W: Write>(console: &mut Console<R, W>) -> anyhow::Result<Choice> {
    console.say("Main menu:")?;
    console.say("(N)ew game")?;
    console.say("(Q)uit")?;
    console.say("(S)tatistics")?;
    let Some(answer) = console.ask("Make your choice: ")? else {
        return Ok(Choice::Quit);
    };
    Ok(match answer.to_lowercase().as_str() {
        "n" => Choice::NewGame,
        "s" => Choice::Statistics,
        "q" => Choice::Quit,
        _ => Choice::Unknown,
    })
}

/// Main menu loop, returns when the player quits or input is closed.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, mut app: App) -> anyhow::Result<()> {
    console.say("This is minesweeper game.")?;
    loop {
        match choose(console)? {
            Choice::NewGame => {
                if !new_game(console, &mut app)? {
                    return Ok(());
                }
            }
            Choice::Statistics => {
                stats::show(console, &app.store.load())?;
                console.say(" ")?;
            }
            Choice::Quit => return Ok(()),
            Choice::Unknown => console.say("The chosen feature is not available.")?,
        }
    }
}

/// Plays one game and records its result. `false` when input closed during setup.
fn new_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    app: &mut App,
) -> anyhow::Result<bool> {
    let config = match app.preset.take() {
        Some(config) => config,
        None => match prompt::setup(console)? {
            Some(config) => config,
            None => return Ok(false),
        },
    };
    let mut session = Session::new(config, app.next_seed());
    let board = session.board();
    log::info!(
        "new game {}x{} with {} mines, seed {}",
        board.config().size.0,
        board.config().size.1,
        board.config().mines,
        board.seed()
    );

    let started_at = Local::now();
    let timer = Instant::now();

    match play(console, &mut session)? {
        SessionEnd::Finished(summary) => {
            let Some(record) = ResultRecord::new(&summary, started_at, timer.elapsed()) else {
                return Ok(true);
            };
            if let Err(err) = app.store.append(record) {
                log::error!("saving to {} failed: {}", app.store.path().display(), err);
                console.say("Unable to open the target file. Saving failed.")?;
            }
        }
        SessionEnd::Abandoned => console.say("Game break!")?,
    }
    Ok(true)
}
