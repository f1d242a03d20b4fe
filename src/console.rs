#![cfg(feature = "std")]

//! Line-oriented console driver for a hot-seat game.
//!
//! Input and output are explicit values so a whole game can be played from
//! a canned script.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use log::debug;

use crate::{
    board::View,
    common::{GameError, PlayerId},
    coord::Position,
    game::{Game, Phase},
    placement::parse_endpoints,
};

const SEPARATOR: &str = "---------------------";
const PASS_PROMPT: &str = "Press Enter and pass the move to another player";
const WRONG_COORDINATES: &str = "Error! You entered wrong coordinates! Try again:";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Drive `game` from its current phase until someone wins.
    pub fn run(&mut self, game: &mut Game) -> anyhow::Result<PlayerId> {
        loop {
            match game.phase() {
                Phase::Setup(id) => {
                    self.setup(game, id)?;
                    self.pass_turn()?;
                }
                Phase::Playing(id) => self.turn(game, id)?,
                Phase::Finished(id) => return Ok(id),
            }
        }
    }

    fn setup(&mut self, game: &mut Game, id: PlayerId) -> anyhow::Result<()> {
        let player = game.player(id);
        writeln!(self.output, "{}, place your ships on the game field\n", player.name())?;
        write!(self.output, "{}", player.board().view(View::Owner))?;

        while let Some(class) = game.pending_ship() {
            if game.phase() != Phase::Setup(id) {
                break;
            }
            writeln!(
                self.output,
                "\nEnter the coordinates of the {} ({} cells):\n",
                class.name(),
                class.length()
            )?;
            loop {
                let line = self.read_line()?;
                let placed = parse_endpoints(&line)
                    .map_err(GameError::from)
                    .and_then(|(a, b)| game.place_ship(a, b));
                match placed {
                    Ok(_) => {
                        writeln!(self.output)?;
                        write!(self.output, "{}", game.player(id).board().view(View::Owner))?;
                        break;
                    }
                    Err(GameError::Placement(e)) => {
                        debug!("placement rejected: {:?}", e);
                        writeln!(self.output, "\n{}\n", e)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(())
    }

    fn turn(&mut self, game: &mut Game, id: PlayerId) -> anyhow::Result<()> {
        let me = game.player(id);
        let them = game.player(id.opponent());
        write!(self.output, "{}", them.board().view(View::Opponent))?;
        writeln!(self.output, "{}", SEPARATOR)?;
        write!(self.output, "{}", me.board().view(View::Owner))?;
        writeln!(self.output, "\n{}, it's your turn:\n", me.name())?;

        let target = self.read_target()?;
        let outcome = game.fire(target)?;
        writeln!(self.output, "\n{}", outcome.message())?;
        if game.winner().is_none() {
            self.pass_turn()?;
        }
        Ok(())
    }

    fn read_target(&mut self) -> anyhow::Result<Position> {
        loop {
            let line = self.read_line()?;
            match line.parse::<Position>() {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    debug!("bad shot {:?}: {}", line, e);
                    writeln!(self.output, "\n{}\n", WRONG_COORDINATES)?;
                }
            }
        }
    }

    fn pass_turn(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}", PASS_PROMPT)?;
        self.output.flush()?;
        self.read_line()?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Next input line, trimmed. Running out of input is an error.
    fn read_line(&mut self) -> anyhow::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if n == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }
}
