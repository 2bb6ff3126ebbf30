use std::io;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use sweeper_core::GameConfig;

mod command;
mod console;
mod menu;
mod play;
mod prompt;
mod render;
mod stats;

use console::Console;
use menu::App;
use stats::StatsStore;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// File the game statistics are appended to
    #[arg(long, default_value = "result.json")]
    stats: PathBuf,

    /// Board width for the first game, skips the setup prompt together with height and mines
    #[arg(long, requires_all = ["height", "mines"])]
    width: Option<u8>,

    /// Board height for the first game
    #[arg(long, requires_all = ["width", "mines"])]
    height: Option<u8>,

    /// Mine count for the first game
    #[arg(long, requires_all = ["width", "height"])]
    mines: Option<u16>,
}

impl Args {
    fn preset(&self) -> anyhow::Result<Option<GameConfig>> {
        let (Some(width), Some(height), Some(mines)) = (self.width, self.height, self.mines) else {
            return Ok(None);
        };
        let config = GameConfig::new((width, height), mines)?;
        if !config.fits_safe_start() {
            return Err(anyhow!(
                "at most {} mines fit on a {}x{} board",
                config.max_mines(),
                width,
                height
            ));
        }
        Ok(Some(config))
    }
}

fn init_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    use tracing_subscriber::filter::LevelFilter;

    let max_level = match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose.log_level_filter())?;
    log::debug!("seed: {:?}", args.seed);

    let app = App::new(StatsStore::new(args.stats.clone()), args.seed, args.preset()?);
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    menu::run(&mut console, app)?;
    log::debug!("App exited");
    Ok(())
}
