use anyhow::{anyhow, bail, Result};
use reversi_core::{Board, Move, Side};
use tracing::{debug, info};

use crate::data::{GameRecord, MatchStats};
use crate::player::Player;

/// Upper bound on plies, passes included; a legal game never gets close
const MAX_PLIES: usize = 2 * reversi_core::NUM_CELLS;

/// Drive one game from the initial position, asking `pick` for every move
fn run_game<F>(mut pick: F) -> Result<GameRecord>
where
    F: FnMut(&Board, Side) -> Result<Move>,
{
    let mut board = Board::new();
    let mut side = Side::Black;
    let mut record = GameRecord::new();

    while !board.is_game_over() {
        if record.len() >= MAX_PLIES {
            bail!("game exceeded {MAX_PLIES} plies");
        }

        let mv = pick(&board, side)?;
        let state = board.clone();
        board
            .apply(mv.action_id(), side)
            .map_err(|e| anyhow!("{side:?} move {mv} failed: {e}"))?;
        record.add_move(state, side, mv);
        side = side.opponent();
    }

    record.set_winner(board.winner());
    let (black, white) = (board.disc_count(Side::Black), board.disc_count(Side::White));
    debug!(plies = record.len(), black, white, winner = ?record.winner, "game over");
    Ok(record)
}

/// Play one game between two players and report the result to both
pub fn play_game(black: &mut dyn Player, white: &mut dyn Player) -> Result<GameRecord> {
    let record = run_game(|board, side| match side {
        Side::Black => black.pick_move(board, side),
        Side::White => white.pick_move(board, side),
    })?;

    black.finish_game(record.winner);
    white.finish_game(record.winner);
    Ok(record)
}

/// Play one game with the same player on both sides
pub fn play_selfplay_game<P: Player + ?Sized>(player: &mut P) -> Result<GameRecord> {
    let record = run_game(|board, side| player.pick_move(board, side))?;
    player.finish_game(record.winner);
    Ok(record)
}

/// Play `games` games, alternating colours, starting with `first` as Black
pub fn play_match(
    games: u32,
    first: &mut dyn Player,
    second: &mut dyn Player,
) -> Result<MatchStats> {
    let mut stats = MatchStats::default();

    for game in 0..games {
        let first_side = if game % 2 == 0 { Side::Black } else { Side::White };
        let record = match first_side {
            Side::Black => play_game(first, second)?,
            Side::White => play_game(second, first)?,
        };

        stats.games += 1;
        match record.winner.winner() {
            Some(side) if side == first_side => stats.first_wins += 1,
            Some(_) => stats.second_wins += 1,
            None => stats.draws += 1,
        }
        debug!(game, plies = record.len(), result = ?record.winner, "match game finished");
    }

    info!(
        first = first.name(),
        second = second.name(),
        games = stats.games,
        first_wins = stats.first_wins,
        second_wins = stats.second_wins,
        draws = stats.draws,
        "match finished"
    );
    Ok(stats)
}
