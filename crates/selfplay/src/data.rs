use ndarray::Array3;
use reversi_core::{Board, GameResult, Move, Side};

/// Record of a single game
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Board state before each move
    pub states: Vec<Board>,
    /// Side and move played from each state
    pub moves: Vec<(Side, Move)>,
    /// Final result of the game
    pub winner: GameResult,
}

impl GameRecord {
    /// Create a new empty game record
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            moves: Vec::new(),
            winner: GameResult::Draw,
        }
    }

    /// Set the winner
    pub fn set_winner(&mut self, winner: GameResult) {
        self.winner = winner;
    }

    /// Add a move to the record
    pub fn add_move(&mut self, state: Board, side: Side, mv: Move) {
        self.states.push(state);
        self.moves.push((side, mv));
    }

    /// Number of plies played, passes included
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if the record is empty
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn passes(&self) -> usize {
        self.moves.iter().filter(|(_, m)| m.is_pass()).count()
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Finalised training sample
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    /// Encoded position `[3, 8, 8]`
    pub position: Array3<f32>,
    /// Normalised root visit distribution (65 elements)
    pub policy: Vec<f32>,
    /// Game winner: +1 Black, -1 White, 0 draw
    pub outcome: f32,
}

impl TrainingSample {
    pub fn new(position: Array3<f32>, policy: Vec<f32>, outcome: f32) -> Self {
        Self {
            position,
            policy,
            outcome,
        }
    }
}

/// Tally of a series of games between two players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub games: u32,
    pub first_wins: u32,
    pub second_wins: u32,
    pub draws: u32,
}

impl MatchStats {
    /// Share of games the first player won
    pub fn first_win_rate(&self) -> f32 {
        if self.games == 0 {
            0.0
        } else {
            self.first_wins as f32 / self.games as f32
        }
    }
}
