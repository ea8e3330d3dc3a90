use core::fmt;
use rand::Rng;

use crate::{
    common::{GameError, Signal},
    config::SessionConfig,
    grid::BoardGrid,
    target::Coordinate,
};

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    fn slot(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.slot() + 1)
    }
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for this player to name a target.
    AwaitingInput(PlayerId),
    /// The winner sank the opposing flagship or fleet.
    GameOver { winner: PlayerId },
    /// A player quit; nobody won.
    Abandoned,
}

/// Record of one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub shooter: PlayerId,
    pub target: Coordinate,
    pub signal: Signal,
    /// State after the shot.
    pub state: SessionState,
}

/// Two boards and whose turn it is.
#[derive(Debug, Clone)]
pub struct GameSession {
    boards: [BoardGrid; 2],
    state: SessionState,
}

impl GameSession {
    /// Populate both boards from `config`. Player one moves first.
    pub fn new<R: Rng>(config: &SessionConfig, rng: &mut R) -> Result<Self, GameError> {
        let first = BoardGrid::populate(config.dimensions, &config.fleet, rng)?;
        let second = BoardGrid::populate(config.dimensions, &config.fleet, rng)?;
        Ok(Self::from_boards(first, second))
    }

    /// Start a session on prepared boards. Player one moves first.
    pub fn from_boards(first: BoardGrid, second: BoardGrid) -> Self {
        Self {
            boards: [first, second],
            state: SessionState::AwaitingInput(PlayerId::One),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Player whose turn it is, `None` once the session has ended.
    pub fn active_player(&self) -> Option<PlayerId> {
        match self.state {
            SessionState::AwaitingInput(p) => Some(p),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.state {
            SessionState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.active_player().is_none()
    }

    /// Board owned by `player`.
    pub fn board(&self, player: PlayerId) -> &BoardGrid {
        &self.boards[player.slot()]
    }

    /// Decode `raw` and fire it at the opponent of the active player.
    ///
    /// Malformed or out-of-range input is rejected and the same player keeps
    /// the turn.
    pub fn fire(&mut self, raw: &str) -> Result<Turn, GameError> {
        let shooter = self.active_player().ok_or(GameError::SessionOver)?;
        let target = self.boards[shooter.other().slot()].parse_target(raw)?;
        self.fire_at(target)
    }

    /// Fire at `target` on the opponent's board.
    ///
    /// Any accepted shot, miss included, passes the turn unless it ends the
    /// game.
    pub fn fire_at(&mut self, target: Coordinate) -> Result<Turn, GameError> {
        let shooter = self.active_player().ok_or(GameError::SessionOver)?;
        let shot = self.boards[shooter.other().slot()].fire(target)?;
        self.state = if shot.game_over {
            log::info!("{} wins with {} at {}", shooter, shot.signal, target);
            SessionState::GameOver { winner: shooter }
        } else {
            SessionState::AwaitingInput(shooter.other())
        };
        log::debug!("{} fired at {} -> {}", shooter, target, shot.signal);
        Ok(Turn {
            shooter,
            target,
            signal: shot.signal,
            state: self.state,
        })
    }

    /// End the session without a winner.
    pub fn quit(&mut self) {
        if !self.is_over() {
            log::info!("session abandoned");
            self.state = SessionState::Abandoned;
        }
    }
}
