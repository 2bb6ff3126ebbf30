use std::io::{self, BufRead, Write};

use sweeper_core::{GameSummary, Outcome, Session};

use crate::command::{self, Command, HELP};
use crate::console::Console;
use crate::render;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameSummary),
    /// The player quit or input was closed before the game was decided.
    Abandoned,
}

/// Runs the game loop until the session is decided or the player gives up.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    session: &mut Session,
) -> io::Result<SessionEnd> {
    loop {
        if let Some(summary) = session.summary() {
            console.say(render::draw(session.board(), true))?;
            console.say(match summary.outcome {
                Outcome::Won => "Game win.",
                _ => "Game over.",
            })?;
            log::info!("game finished: {:?}", summary);
            console.ask("Press enter to return to menu.")?;
            return Ok(SessionEnd::Finished(summary));
        }

        console.say(render::draw(session.board(), false))?;
        let Some(line) = console.ask("> ")? else {
            return Ok(SessionEnd::Abandoned);
        };

        match command::parse(&line) {
            Ok(Command::Quit) => return Ok(SessionEnd::Abandoned),
            Ok(Command::Help) => console.say(HELP)?,
            Ok(Command::Act(action)) => match session.dispatch(action) {
                Ok(outcome) => log::trace!("{:?} -> {:?}", action, outcome),
                Err(err) => {
                    log::debug!("action at {:?} rejected: {}", action.coords(), err);
                    console.say(err)?;
                }
            },
            Err(err) => console.say(err)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::*;
    use sweeper_core::{Board, MineLayout};

    fn session() -> Session {
        let layout = MineLayout::from_mine_coords((4, 2), &[(2, 0), (2, 1)]).unwrap();
        Session::from_board(Board::from_layout(layout))
    }

    #[test]
    fn winning_game_reports_summary() {
        let mut console = scripted("r 0 0\nr 3 0\nr 3 1\n\n");
        let mut session = session();

        let end = play(&mut console, &mut session).unwrap();

        assert_eq!(
            end,
            SessionEnd::Finished(GameSummary {
                outcome: Outcome::Won,
                mines_left: 0,
                turns: 3,
            })
        );
        let out = transcript(&console);
        assert!(out.contains("Game win."));
        assert!(out.contains("Press enter to return to menu."));
    }

    #[test]
    fn losing_game_shows_mines() {
        let mut console = scripted("f 2 0\nr 2 1\n\n");
        let mut session = session();

        let end = play(&mut console, &mut session).unwrap();

        assert_eq!(
            end,
            SessionEnd::Finished(GameSummary {
                outcome: Outcome::Lost,
                mines_left: 1,
                turns: 2,
            })
        );
        let out = transcript(&console);
        assert!(out.contains("Game over."));
        assert!(out.contains("  1  #  #  X  #"));
    }

    #[test]
    fn rejected_moves_are_reported_and_counted() {
        let mut console = scripted("r 0 0\nr 0 0\nr 9 9\nzap\nh\nq\n");
        let mut session = session();

        assert_eq!(play(&mut console, &mut session).unwrap(), SessionEnd::Abandoned);

        assert_eq!(session.turns(), 3);
        let out = transcript(&console);
        assert!(out.contains("already revealed"));
        assert!(out.contains("outside the board"));
        assert!(out.contains("Unknown command 'zap'"));
        assert!(out.contains("Commands:"));
    }

    #[test]
    fn undecodable_line_is_reported_and_game_continues() {
        let mut console = scripted_bytes(b"r 0 0\n\xff\xfe\nr 3 0\nr 3 1\n\n");
        let mut session = session();

        let end = play(&mut console, &mut session).unwrap();

        assert!(matches!(end, SessionEnd::Finished(s) if s.outcome == Outcome::Won));
        assert_eq!(session.turns(), 3);
        assert!(transcript(&console).contains("Unknown command"));
    }

    #[test]
    fn closed_input_abandons_game() {
        let mut console = scripted("r 0 0\n");
        let mut session = session();

        assert_eq!(play(&mut console, &mut session).unwrap(), SessionEnd::Abandoned);
        assert_eq!(session.outcome(), Outcome::InProgress);
    }
}
