//! Position capture: one snapshot before the first move and one after each.

use tracing::warn;

use crate::engine::{ReplayBoard, RulesEngine};
use crate::error::ParseFailure;

/// Re-walk `moves` from the start position. Aborts on the first move the
/// board refuses, so a returned list always has `moves.len() + 1` entries.
pub fn replay_positions<E: RulesEngine>(
    engine: &E,
    moves: &[String],
) -> Result<Vec<String>, ParseFailure> {
    let mut board = engine.new_board();
    let mut positions = Vec::with_capacity(moves.len() + 1);
    positions.push(board.position_id());

    for (ply, san) in moves.iter().enumerate() {
        match board.apply_san(san) {
            Ok(fen) => positions.push(fen),
            Err(e) => {
                warn!(ply = ply + 1, san = %san, error = %e, "Resolved move could not be replayed");
                return Err(ParseFailure::replay_error(san));
            }
        }
    }

    Ok(positions)
}
