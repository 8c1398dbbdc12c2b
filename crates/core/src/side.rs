/// Side to move. Black moves first and is the "positive" side of the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// +1.0 for Black, -1.0 for White
    pub fn sign(self) -> f32 {
        match self {
            Side::Black => 1.0,
            Side::White => -1.0,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    BlackWin,
    WhiteWin,
    Draw,
}

impl GameResult {
    /// Winner as an absolute value: +1 Black, -1 White, 0 draw
    pub fn value(self) -> f32 {
        match self {
            GameResult::BlackWin => 1.0,
            GameResult::WhiteWin => -1.0,
            GameResult::Draw => 0.0,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::BlackWin => Some(Side::Black),
            GameResult::WhiteWin => Some(Side::White),
            GameResult::Draw => None,
        }
    }
}
