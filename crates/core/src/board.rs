use std::fmt;
use std::hash::{Hash, Hasher};

use ndarray::Array3;
use rust_reversi_core::board::{Board as rrcBoard, BoardError as RrcBoardError, Turn};

use crate::action::{ActionId, BOARD_SIZE, NUM_CELLS, PASS_ACTION};
use crate::error::{BoardError, Result};
use crate::side::{GameResult, Side};

/// Number of input planes produced by [`Board::to_planes`]
pub const PLANES: usize = 3;

/// Bit of each cell id in the rust_reversi_core layout (a1 is the top bit)
const BITS: [u64; NUM_CELLS] = {
    let mut bits = [0u64; NUM_CELLS];
    let mut i = 0;
    while i < NUM_CELLS {
        bits[i] = 1u64 << (63 - i);
        i += 1;
    }
    bits
};

fn turn(side: Side) -> Turn {
    match side {
        Side::Black => Turn::Black,
        Side::White => Turn::White,
    }
}

/// Canonical fingerprint of a position (both disc masks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub u128);

/// Othello position backed by `rust_reversi_core`.
///
/// The inner board tracks whose turn it is, but the search addresses sides
/// explicitly, so every query re-targets the inner board to the side asked
/// about. Equality and hashing only look at the discs.
#[derive(Clone)]
pub struct Board {
    inner: rrcBoard,
}

impl Board {
    /// Standard opening position
    pub fn new() -> Self {
        Self {
            inner: rrcBoard::new(),
        }
    }

    /// Parse a 64-cell grid: `X` black, `O` white, `-` empty. Whitespace is ignored.
    pub fn from_grid(grid: &str) -> Result<Self> {
        let cells: String = grid.chars().filter(|c| !c.is_whitespace()).collect();
        let count = cells.chars().count();
        if count != NUM_CELLS {
            return Err(BoardError::InvalidGrid(format!(
                "expected {NUM_CELLS} cells, got {count}"
            )));
        }

        let mut inner = rrcBoard::new();
        inner
            .set_board_str(&cells, Turn::Black)
            .map_err(|_| BoardError::InvalidGrid(format!("unexpected character in {cells:?}")))?;
        Ok(Self { inner })
    }

    /// Black and white disc masks
    fn masks(&self) -> (u64, u64) {
        let (player, opponent, turn) = self.inner.get_board();
        match turn {
            Turn::Black => (player, opponent),
            Turn::White => (opponent, player),
        }
    }

    /// Inner board with `side` to move
    fn view(&self, side: Side) -> rrcBoard {
        let (black, white) = self.masks();
        let mut board = rrcBoard::new();
        match side {
            Side::Black => board.set_board(black, white, Turn::Black),
            Side::White => board.set_board(white, black, Turn::White),
        }
        board
    }

    /// Legal placements for `side` as a bitmask; id `i` is bit `63 - i`
    pub fn legal_moves_mask(&self, side: Side) -> u64 {
        self.view(side).get_legal_moves()
    }

    /// Legal placements for `side` in ascending action id order.
    /// Empty when the side has to pass.
    pub fn legal_actions(&self, side: Side) -> Vec<ActionId> {
        self.view(side).get_legal_moves_vec().to_vec()
    }

    pub fn has_legal_move(&self, side: Side) -> bool {
        !self.view(side).is_pass()
    }

    /// Play `action` for `side` in place.
    ///
    /// A pass leaves the discs unchanged and is only accepted when `side`
    /// has no legal placement and the game is not over.
    pub fn apply(&mut self, action: ActionId, side: Side) -> Result<()> {
        if action > PASS_ACTION {
            return Err(BoardError::InvalidAction(action));
        }
        if self.inner.get_turn() != turn(side) {
            self.inner = self.view(side);
        }

        if action == PASS_ACTION {
            self.inner.do_pass().map_err(|_| BoardError::PassNotAllowed)
        } else {
            self.inner.do_move(action).map_err(|e| match e {
                RrcBoardError::InvalidPosition => BoardError::InvalidAction(action),
                _ => BoardError::IllegalMove(action),
            })
        }
    }

    /// The game ends when neither side can place a disc
    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    pub fn disc_count(&self, side: Side) -> u32 {
        let count = match side {
            Side::Black => self.inner.black_piece_num(),
            Side::White => self.inner.white_piece_num(),
        };
        count as u32
    }

    /// Disc majority. Only meaningful once [`Board::is_game_over`] holds.
    pub fn winner(&self) -> GameResult {
        let black = self.inner.black_piece_num();
        let white = self.inner.white_piece_num();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => GameResult::BlackWin,
            std::cmp::Ordering::Less => GameResult::WhiteWin,
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    pub fn fingerprint(&self) -> StateId {
        let (black, white) = self.masks();
        StateId(((black as u128) << 64) | white as u128)
    }

    /// Network input `[3, 8, 8]`:
    /// plane 0 black discs, plane 1 white discs, plane 2 all ones when Black is to move.
    pub fn to_planes(&self, side: Side) -> Array3<f32> {
        let (black, white) = self.masks();
        let mut planes = Array3::<f32>::zeros((PLANES, BOARD_SIZE, BOARD_SIZE));
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let bit = BITS[row * BOARD_SIZE + col];
                match (black & bit, white & bit) {
                    (0, 0) => {}
                    (_, 0) => planes[[0, row, col]] = 1.0,
                    (0, _) => planes[[1, row, col]] = 1.0,
                    (_, _) => {
                        debug_assert!(false, "Invalid board state: overlapping pieces");
                    }
                }
                if side == Side::Black {
                    planes[[2, row, col]] = 1.0;
                }
            }
        }
        planes
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.masks() == other.masks()
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.masks().hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.masks();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let bit = BITS[row * BOARD_SIZE + col];
                let c = if black & bit != 0 {
                    'X'
                } else if white & bit != 0 {
                    'O'
                } else {
                    '-'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (black, white) = self.masks();
        f.debug_struct("Board")
            .field("black", &format_args!("{black:#018x}"))
            .field("white", &format_args!("{white:#018x}"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_legal_actions() {
        let board = Board::new();
        assert_eq!(board.legal_actions(Side::Black), vec![19, 26, 37, 44]);
        assert_eq!(board.legal_actions(Side::White), vec![20, 29, 34, 43]);
        assert!(!board.is_game_over());
    }

    #[test]
    fn test_action_ids_match_row_major_cells() {
        // d3 is row 2, col 3
        let board = Board::new();
        assert_ne!(board.legal_moves_mask(Side::Black) & BITS[19], 0);
        assert_eq!(board.to_planes(Side::Black)[[0, 3, 4]], 1.0);
        assert_eq!(board.to_planes(Side::Black)[[0, 4, 3]], 1.0);
    }

    #[test]
    fn test_apply_flips_discs() {
        let mut board = Board::new();
        board.apply(19, Side::Black).unwrap();
        assert_eq!(board.disc_count(Side::Black), 4);
        assert_eq!(board.disc_count(Side::White), 1);
        // d4 (id 27) was flipped
        assert!(board.to_planes(Side::White)[[0, 3, 3]] == 1.0);
    }

    #[test]
    fn test_apply_ignores_inner_turn() {
        // Black moves twice in a row; each call re-targets the side to move
        let mut board = Board::new();
        board.apply(19, Side::Black).unwrap();
        assert!(board.legal_actions(Side::Black).contains(&44));
        board.apply(44, Side::Black).unwrap();
        assert_eq!(board.disc_count(Side::White), 0);
    }

    #[test]
    fn test_apply_rejects_illegal_moves() {
        let mut board = Board::new();
        assert_eq!(board.apply(0, Side::Black), Err(BoardError::IllegalMove(0)));
        assert_eq!(board.apply(27, Side::Black), Err(BoardError::IllegalMove(27)));
        assert_eq!(
            board.apply(PASS_ACTION, Side::Black),
            Err(BoardError::PassNotAllowed)
        );
        assert_eq!(board.apply(70, Side::Black), Err(BoardError::InvalidAction(70)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_forced_pass_position() {
        let mut board = Board::from_grid(
            "OX--------------------------------------------------------------",
        )
        .unwrap();
        assert!(board.legal_actions(Side::Black).is_empty());
        assert!(!board.has_legal_move(Side::Black));
        assert_eq!(board.legal_actions(Side::White), vec![2]);
        assert!(!board.is_game_over());

        let before = board.clone();
        board.apply(PASS_ACTION, Side::Black).unwrap();
        assert_eq!(board, before);
        board.apply(2, Side::White).unwrap();
        assert_eq!(board.disc_count(Side::White), 3);
    }

    #[test]
    fn test_full_board_winner() {
        let mut grid = "X".repeat(63);
        grid.push('O');
        let board = Board::from_grid(&grid).unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.winner(), GameResult::BlackWin);

        let grid = format!("{}{}", "X".repeat(32), "O".repeat(32));
        let board = Board::from_grid(&grid).unwrap();
        assert!(board.is_game_over());
        assert_eq!(board.winner(), GameResult::Draw);
    }

    #[test]
    fn test_no_wraparound_across_files() {
        // White at h1 and black at a2 are adjacent ids (7, 8) but not neighbours.
        let board = Board::from_grid(
            "-------O
             X-------
             --------
             --------
             --------
             --------
             --------
             --------",
        )
        .unwrap();
        assert!(board.legal_actions(Side::Black).is_empty());
        assert!(board.is_game_over());
    }

    #[test]
    fn test_to_planes_encoding() {
        let board = Board::new();
        let planes = board.to_planes(Side::Black);
        assert_eq!(planes.shape(), &[3, 8, 8]);
        assert_eq!(planes[[0, 3, 4]], 1.0);
        assert_eq!(planes[[1, 3, 3]], 1.0);
        assert_eq!(planes.index_axis(ndarray::Axis(0), 0).sum(), 2.0);
        assert_eq!(planes.index_axis(ndarray::Axis(0), 1).sum(), 2.0);
        assert_eq!(planes.index_axis(ndarray::Axis(0), 2).sum(), 64.0);

        let planes = board.to_planes(Side::White);
        assert_eq!(planes.index_axis(ndarray::Axis(0), 2).sum(), 0.0);
    }

    #[test]
    fn test_fingerprint_tracks_position() {
        let mut board = Board::new();
        let start = board.fingerprint();
        assert_eq!(start, Board::new().fingerprint());
        board.apply(19, Side::Black).unwrap();
        assert_ne!(board.fingerprint(), start);

        // The side the inner board last moved for does not leak into the key
        let mut a = Board::new();
        a.apply(19, Side::Black).unwrap();
        let b = Board::from_grid(&a.to_string()).unwrap();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_round_trips_through_grid() {
        let board = Board::new();
        let parsed = Board::from_grid(&board.to_string()).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_invalid_grid() {
        assert!(matches!(
            Board::from_grid("XO"),
            Err(BoardError::InvalidGrid(_))
        ));
        assert!(matches!(
            Board::from_grid(&"Z".repeat(64)),
            Err(BoardError::InvalidGrid(_))
        ));
        assert!(matches!(
            Board::from_grid(&"-".repeat(65)),
            Err(BoardError::InvalidGrid(_))
        ));
    }
}
