use alloc::string::String;

use log::info;

use crate::{
    board::Board,
    common::{GameError, PlayerId, ShotOutcome},
    coord::Position,
    fleet::Fleet,
    placement,
    ship::{Ship, ShipClass},
    shot,
};

/// A seat: name, ground-truth board and placed fleet.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    board: Board,
    fleet: Fleet,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
            fleet: Fleet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }
}

/// Where the game currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The given player is placing ships.
    Setup(PlayerId),
    /// The given player fires next.
    Playing(PlayerId),
    /// The given player sank the whole opposing fleet.
    Finished(PlayerId),
}

/// Two-player game: both setups in turn, then alternating shots until one
/// fleet is sunk. Player one places first and fires first.
#[derive(Debug, Clone)]
pub struct Game {
    players: [Player; 2],
    phase: Phase,
}

impl Game {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            players: [Player::new(first), Player::new(second)],
            phase: Phase::Setup(PlayerId::One),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Player expected to act now: placing or firing. `None` once finished.
    pub fn active(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Setup(id) | Phase::Playing(id) => Some(id),
            Phase::Finished(_) => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished(id) => Some(id),
            _ => None,
        }
    }

    /// Catalog entry the setup player has to place next.
    pub fn pending_ship(&self) -> Option<ShipClass> {
        match self.phase {
            Phase::Setup(id) => self.player(id).fleet.next_class(),
            _ => None,
        }
    }

    /// Place the pending ship of the setup player between `a` and `b`.
    ///
    /// A rejected placement leaves the game untouched so the same ship can
    /// be retried. Completing a fleet hands setup to the second player, or
    /// starts play once both fleets are complete.
    pub fn place_ship(&mut self, a: Position, b: Position) -> Result<Ship, GameError> {
        let Phase::Setup(id) = self.phase else {
            return Err(GameError::WrongPhase);
        };
        let player = self.player_mut(id);
        let class = player.fleet.next_class().ok_or(GameError::WrongPhase)?;
        let ship = placement::place(&mut player.board, &mut player.fleet, class, a, b)?;

        if player.fleet.is_complete() {
            self.phase = match id {
                PlayerId::One => Phase::Setup(PlayerId::Two),
                PlayerId::Two => Phase::Playing(PlayerId::One),
            };
            info!("{} finished placing ships; now {:?}", self.player(id).name, self.phase);
        }
        Ok(ship)
    }

    /// The active player fires at `target` on the opponent's board.
    ///
    /// The turn passes to the opponent unless the shot wins the game.
    pub fn fire(&mut self, target: Position) -> Result<ShotOutcome, GameError> {
        let Phase::Playing(id) = self.phase else {
            return Err(GameError::WrongPhase);
        };
        let opponent = self.player_mut(id.opponent());
        let outcome = shot::resolve(&mut opponent.board, &opponent.fleet, target);

        self.phase = if outcome == ShotOutcome::Won {
            info!("{} won", self.player(id).name);
            Phase::Finished(id)
        } else {
            Phase::Playing(id.opponent())
        };
        Ok(outcome)
    }
}
