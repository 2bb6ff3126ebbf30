use std::io::{self, BufRead, Write};

use sweeper_core::{Coord, GameConfig};

use crate::console::Console;

/// Asks until a positive integer is entered; `None` once input is closed.
pub fn field_value<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
) -> io::Result<Option<u64>> {
    loop {
        let Some(answer) = console.ask(prompt)? else {
            return Ok(None);
        };
        match answer.parse::<i64>() {
            Err(_) => console.say("Please input an integer.")?,
            Ok(number) if number < 1 => console.say("Field value must be bigger or equal to 1")?,
            Ok(number) => return Ok(Some(number.unsigned_abs())),
        }
    }
}

/// Collects width, height and mine count, asking for all three again on any violation.
pub fn setup<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<Option<GameConfig>> {
    console.say("Game setting")?;
    loop {
        let Some(width) = field_value(console, "Input width:")? else {
            return Ok(None);
        };
        let Some(height) = field_value(console, "Input height:")? else {
            return Ok(None);
        };
        let Some(mines) = field_value(console, "Input mines:")? else {
            return Ok(None);
        };

        let (Ok(width), Ok(height)) = (Coord::try_from(width), Coord::try_from(height)) else {
            console.say(format_args!(
                "Field is too large, at most {} tiles per side.",
                Coord::MAX
            ))?;
            continue;
        };
        let total = u64::from(width) * u64::from(height);
        let Some(mines) = u16::try_from(mines).ok().filter(|&m| u64::from(m) < total) else {
            console.say("Too many mines for a small field!")?;
            continue;
        };

        match GameConfig::new((width, height), mines) {
            Ok(config) if config.fits_safe_start() => {
                log::debug!("setup: {:?}", config);
                return Ok(Some(config));
            }
            Ok(config) => console.say(format_args!(
                "Too many mines, the first click needs room: at most {} mines on this field.",
                config.max_mines()
            ))?,
            Err(err) => console.say(err)?,
        }
    }
}
