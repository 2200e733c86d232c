//! Legality checks
//!
//! A move is legal if it's pseudo-legal for the moving piece and doesn't leave the king of the
//! mover under attack. The second condition is verified by simulation: the move is applied to the
//! position, the king is checked against the full attack coverage of the opponent, and then the
//! move is either kept or reverted.

use crate::bitboard::Bitboard;
use crate::board::Position;
use crate::movegen;
use crate::moves::{Committed, MoveError, RawUndo, StaleUndo};
use crate::piece::{Piece, PieceId};
use crate::types::Square;

use log::{debug, warn};

/// Applies the move without any legality checks, returning the undo record and the captured piece
///
/// The piece standing on `dst` (if any) is captured. Returns `None` without touching the position
/// if the piece `id` is not live or already stands on `dst`.
fn make_unchecked(
    pos: &mut Position,
    id: PieceId,
    dst: Square,
) -> Option<(RawUndo, Option<Piece>)> {
    let mover_idx = pos.index_of(id)?;
    let src = pos.live_pieces()[mover_idx].square;
    let victim = match pos.get(dst) {
        Some(occupant) if occupant.id == id => return None,
        Some(occupant) => Some((pos.index_of(occupant.id)?, occupant.id)),
        None => None,
    };

    let mut idx = mover_idx;
    let captured = victim.map(|(victim_idx, _)| {
        if victim_idx < mover_idx {
            idx -= 1;
        }
        pos.capture(victim_idx)
    });
    pos.set_square(idx, dst);
    pos.refresh_grid();
    let u = RawUndo {
        piece: id,
        src,
        dst,
        victim,
    };
    Some((u, captured))
}

/// Reverts the move applied with [`make_unchecked()`]
///
/// `u` must be the undo record of the latest move applied to `pos`. The position is restored
/// exactly, including the order of live and captured pieces.
pub(crate) fn unmake_move(pos: &mut Position, u: RawUndo) {
    if let Some(idx) = pos.index_of(u.piece) {
        pos.set_square(idx, u.src);
    }
    if let Some((idx, _)) = u.victim {
        pos.restore(idx);
    }
    pos.refresh_grid();
}

/// Checks that `u` is the undo record of the latest move applied to `pos`
fn validate_undo(pos: &Position, u: &RawUndo) -> Result<(), StaleUndo> {
    let stale = StaleUndo { piece: u.piece };
    match pos.piece(u.piece) {
        Some(p) if p.square == u.dst => {}
        _ => return Err(stale),
    }
    if pos.get(u.src).is_some() {
        return Err(stale);
    }
    if let Some((idx, victim)) = u.victim {
        let last = pos.captured_pieces().last().map(|p| p.id);
        if last != Some(victim) || idx > pos.live_pieces().len() {
            return Err(stale);
        }
    }
    Ok(())
}

/// Applies the move if it's legal, returning the undo information along with it
///
/// On error, `pos` is left unchanged.
pub fn try_make(
    pos: &mut Position,
    id: PieceId,
    dst: Square,
) -> Result<(Committed, RawUndo), MoveError> {
    let piece = *pos.piece(id).ok_or(MoveError::NoSuchPiece(id))?;
    if !movegen::candidate_moves(pos, &piece).all().has(dst) {
        debug!("rejected {}-{}: not pseudo-legal", piece, dst);
        return Err(MoveError::NotPseudoLegal);
    }

    let (u, captured) = make_unchecked(pos, id, dst).ok_or(MoveError::NotPseudoLegal)?;
    match pos.is_in_check(piece.color) {
        Ok(false) => {}
        Ok(true) => {
            unmake_move(pos, u);
            debug!("rejected {}-{}: king exposed", piece, dst);
            return Err(MoveError::KingExposed);
        }
        Err(e) => {
            unmake_move(pos, u);
            warn!("cannot verify {}-{}: {}", piece, dst, e);
            return Err(e.into());
        }
    }

    let committed = Committed {
        piece: id,
        kind: piece.kind,
        color: piece.color,
        src: piece.square,
        dst,
        captured,
    };
    debug!("committed {}", committed);
    Ok((committed, u))
}

/// Tries to move the piece `id` to `dst`
///
/// The move is rejected with:
///
/// - [`MoveError::NoSuchPiece`] if there is no live piece `id`
/// - [`MoveError::NotPseudoLegal`] if `dst` is not among the candidate moves of the piece
/// - [`MoveError::KingExposed`] if the move leaves the king of the mover attacked
/// - [`MoveError::NoSuchKing`] if the mover has no king at all
///
/// In all these cases, the position stays exactly as it was before the call.
#[inline]
pub fn attempt_move(pos: &mut Position, id: PieceId, dst: Square) -> Result<Committed, MoveError> {
    try_make(pos, id, dst).map(|(c, _)| c)
}

/// Reverts the move previously committed by [`try_make()`]
///
/// `u` must be the undo record of the latest move committed in `pos`. Otherwise, the position is
/// left unchanged and [`StaleUndo`] is returned.
pub fn revert(pos: &mut Position, u: RawUndo) -> Result<(), StaleUndo> {
    validate_undo(pos, &u)?;
    unmake_move(pos, u);
    Ok(())
}

/// Returns `true` if the move is legal, leaving the position unchanged
///
/// Ordinary rejections yield `Ok(false)`. Only the missing king is reported as an error.
pub fn is_legal(pos: &mut Position, id: PieceId, dst: Square) -> Result<bool, MoveError> {
    match try_make(pos, id, dst) {
        Ok((_, u)) => {
            unmake_move(pos, u);
            Ok(true)
        }
        Err(e) if e.is_fatal() => Err(e),
        Err(_) => Ok(false),
    }
}

/// Returns all the squares the piece `id` can legally move to
pub fn legal_moves(pos: &Position, id: PieceId) -> Result<Bitboard, MoveError> {
    let piece = *pos.piece(id).ok_or(MoveError::NoSuchPiece(id))?;
    let mut scratch = pos.clone();
    let mut res = Bitboard::EMPTY;
    for dst in movegen::candidate_moves(pos, &piece).all() {
        if is_legal(&mut scratch, id, dst)? {
            res.set(dst);
        }
    }
    Ok(res)
}
