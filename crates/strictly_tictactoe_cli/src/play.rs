//! Interactive play over line-oriented text I/O, against the engine
//! or between two humans.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_tictactoe::{Board, Game, Outcome, Position, Scoreboard, rules};
use strictly_tictactoe_ai::{Difficulty, MoveSelector};
use tracing::{debug, info, instrument, warn};

/// Pause before an engine move, so the reply doesn't feel instant.
#[instrument]
pub fn think_delay(difficulty: Difficulty) -> Duration {
    match difficulty {
        Difficulty::Easy => Duration::from_millis(500),
        Difficulty::Medium => Duration::from_millis(1000),
        Difficulty::Hard => Duration::from_millis(1500),
    }
}

/// One sitting: any number of rounds with a running score.
///
/// Without an engine both marks are entered at the prompt.
#[derive(Debug)]
pub struct PlaySession {
    engine: Option<MoveSelector>,
    game: Game,
    score: Scoreboard,
    think_delay: bool,
}

/// What the human typed at the move prompt.
enum Input {
    Move(Position),
    Quit,
    Unknown(String),
}

impl PlaySession {
    /// Creates a session; the human plays whichever mark the engine doesn't.
    #[instrument(skip(engine), fields(difficulty = %engine.difficulty(), ai_mark = %engine.mark()))]
    pub fn new(engine: MoveSelector, think_delay: bool) -> Self {
        Self {
            engine: Some(engine),
            game: Game::new(),
            score: Scoreboard::new(),
            think_delay,
        }
    }

    /// Creates a session for two humans sharing the prompt.
    #[instrument]
    pub fn two_player() -> Self {
        Self {
            engine: None,
            game: Game::new(),
            score: Scoreboard::new(),
            think_delay: false,
        }
    }

    /// Totals so far.
    pub fn score(&self) -> Scoreboard {
        self.score
    }

    fn engine_to_move(&self) -> bool {
        self.engine
            .as_ref()
            .is_some_and(|engine| engine.mark() == self.game.to_move())
    }

    /// Runs rounds until the human quits or input ends.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        match &self.engine {
            Some(engine) => write!(output, "You are {}. ", engine.mark().opponent())?,
            None => write!(output, "X and O take turns. ")?,
        }
        writeln!(
            output,
            "Enter a cell number (1-9), a \"row col\" pair, or q to quit."
        )?;

        loop {
            let Some(outcome) = self.play_round(&mut input, &mut output)? else {
                break;
            };

            self.score.record(outcome);
            writeln!(output, "{}", self.game.board().grid())?;
            let line = rules::winning_line(&self.game.board())
                .map(|cells| {
                    let cells: Vec<String> = cells.iter().map(|c| c.label().to_string()).collect();
                    format!(" ({})", cells.join(", "))
                })
                .unwrap_or_default();
            writeln!(output, "{}{}", self.describe(outcome), line)?;
            writeln!(output, "Score: {}", self.score)?;

            writeln!(
                output,
                "Play again? [y = next round, r = new game with scores reset, N = quit]"
            )?;
            output.flush()?;
            let answer = read_line(&mut input)?.unwrap_or_default();
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => self.game.reset(),
                "r" | "reset" => {
                    self.score.reset();
                    self.game.reset();
                    info!("Scores reset");
                    writeln!(output, "Scores reset. Score: {}", self.score)?;
                }
                _ => break,
            }
        }

        info!(score = %self.score, "Session over");
        Ok(())
    }

    /// Plays one round. `None` if the human quit or input ran out.
    fn play_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<Outcome>> {
        loop {
            let board = self.game.board();
            let outcome = if self.engine_to_move() {
                self.engine_move(&board, output)?
            } else {
                writeln!(output, "{}", board.grid())?;
                writeln!(output, "Your move ({}):", self.game.to_move())?;
                output.flush()?;
                let Some(line) = read_line(input)? else {
                    return Ok(None);
                };
                match parse_input(&line) {
                    Input::Quit => return Ok(None),
                    Input::Unknown(text) => {
                        writeln!(output, "Not a cell: {:?}", text)?;
                        continue;
                    }
                    Input::Move(pos) => match self.game.make_move(pos) {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            warn!(error = %e, "Rejected human move");
                            writeln!(output, "{}", e)?;
                            continue;
                        }
                    },
                }
            };

            if outcome.is_terminal() {
                return Ok(Some(outcome));
            }
        }
    }

    fn engine_move<W: Write>(&mut self, board: &Board, output: &mut W) -> Result<Outcome> {
        let engine = self.engine.as_mut().context("no engine in this session")?;
        writeln!(output, "Thinking...")?;
        output.flush()?;
        if self.think_delay {
            std::thread::sleep(think_delay(engine.difficulty()));
        }
        let pos = engine
            .best_move(board)
            .context("engine found no move on an unfinished board")?;
        writeln!(output, "Engine plays {}", pos)?;
        Ok(self.game.make_move(pos)?)
    }

    fn describe(&self, outcome: Outcome) -> String {
        match (outcome, &self.engine) {
            (Outcome::Won(p), None) => format!("{p} wins!"),
            (Outcome::Won(p), Some(engine)) if p == engine.mark() => "Engine wins!".to_string(),
            (Outcome::Won(_), Some(_)) => "You win!".to_string(),
            (Outcome::Draw, _) => "It's a draw!".to_string(),
            (Outcome::InProgress, _) => "Game in progress".to_string(),
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("End of input");
        return Ok(None);
    }
    Ok(Some(line))
}

fn parse_input(line: &str) -> Input {
    let text = line.trim();
    if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }
    match Position::from_label_or_number(text) {
        Some(pos) => Input::Move(pos),
        None => Input::Unknown(text.to_string()),
    }
}
