//! Property-based tests using proptest.

use movelaw::movegen;
use movelaw::{Bitboard, Color, File, Game, Piece, PieceId, PieceKind, Position, Rank, Square};

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (0..64usize).prop_map(Square::from_index)
}

/// All the legal moves of the side on move
fn legal_list(game: &Game) -> Vec<(PieceId, Square)> {
    let pos = game.position();
    let mut res = Vec::new();
    for p in pos.live_pieces().iter().filter(|p| p.color == game.side()) {
        for dst in pos.legal_moves(p.id).unwrap() {
            res.push((p.id, dst));
        }
    }
    res
}

/// Plays up to `num_moves` random legal moves
fn random_game(seed: u64, num_moves: usize) -> Game {
    let mut game = Game::initial();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = legal_list(&game);
        if moves.is_empty() {
            break;
        }
        let (id, dst) = moves[rng.gen_range(0..moves.len())];
        game.play(id, dst).unwrap();
    }
    game
}

fn check_consistent(pos: &Position) -> Result<(), TestCaseError> {
    let mut occupied = Bitboard::EMPTY;
    for p in pos.live_pieces() {
        prop_assert!(!p.captured);
        prop_assert!(!occupied.has(p.square), "two pieces on {}", p.square);
        occupied.set(p.square);
        let o = pos.get(p.square);
        prop_assert_eq!(o.map(|o| (o.id, o.kind, o.color)), Some((p.id, p.kind, p.color)));
    }
    prop_assert_eq!(pos.occupied(), occupied);
    prop_assert!(pos.captured_pieces().iter().all(|p| p.captured));
    prop_assert_eq!(
        pos.live_pieces().len() + pos.captured_pieces().len(),
        32
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: grid always matches the live pieces, and no two pieces share a square
    #[test]
    fn prop_grid_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::initial();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = legal_list(&game);
            if moves.is_empty() {
                break;
            }
            let (id, dst) = moves[rng.gen_range(0..moves.len())];
            game.play(id, dst).unwrap();
            check_consistent(game.position())?;
        }
    }

    /// Property: a committed move never leaves the king of the mover attacked
    #[test]
    fn prop_king_not_exposed(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = Game::initial();
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..num_moves {
            let moves = legal_list(&game);
            if moves.is_empty() {
                break;
            }
            let (id, dst) = moves[rng.gen_range(0..moves.len())];
            let c = game.play(id, dst).unwrap();
            prop_assert_eq!(game.position().is_in_check(c.color), Ok(false));
        }
    }

    /// Property: rejected moves leave the position untouched
    #[test]
    fn prop_rejection_is_exact(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        dst in square_strategy(),
    ) {
        let game = random_game(seed, num_moves);
        let before = game.position().clone();
        for p in before.live_pieces() {
            let mut pos = before.clone();
            match pos.attempt_move(p.id, dst) {
                Ok(c) => {
                    prop_assert_eq!(c.dst, dst);
                    prop_assert!(before.legal_moves(p.id).unwrap().has(dst));
                    check_consistent(&pos)?;
                }
                Err(e) => {
                    prop_assert!(!e.is_fatal());
                    prop_assert_eq!(&pos, &before);
                }
            }
        }
    }

    /// Property: undoing all the moves restores the initial position exactly
    #[test]
    fn prop_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut game = random_game(seed, num_moves);
        while !game.is_empty() {
            let side = game.side();
            game.undo().unwrap();
            prop_assert_eq!(game.side(), side.inv());
        }
        prop_assert_eq!(game.position(), &Position::initial());
        prop_assert_eq!(game.side(), Color::White);
    }

    /// Property: queries don't depend on how many times they were made, and a king never gets a
    /// destination covered by the opponent
    #[test]
    fn prop_queries_are_idempotent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let game = random_game(seed, num_moves);
        let pos = game.position();
        for c in [Color::White, Color::Black] {
            let first = pos.attack_coverage(c);
            prop_assert_eq!(pos.attack_coverage(c), first);
        }
        for p in pos.live_pieces() {
            let first = movegen::candidate_moves(pos, p);
            prop_assert_eq!(movegen::candidate_moves(pos, p), first);
            prop_assert_eq!(pos.legal_moves(p.id), pos.legal_moves(p.id));
            prop_assert_eq!(first.moves & first.captures, Bitboard::EMPTY);
            prop_assert_eq!(first.captures & !pos.color(p.color.inv()), Bitboard::EMPTY);
            prop_assert_eq!(first.moves & pos.occupied(), Bitboard::EMPTY);
            if p.kind == PieceKind::King {
                let danger = pos.attack_coverage(p.color.inv());
                prop_assert_eq!(first.all() & danger, Bitboard::EMPTY);
            }
        }
    }

    /// Property: white and black pawns mirror each other
    #[test]
    fn prop_pawn_symmetry(file in 0..8usize, rank in 1..7usize) {
        let file = File::from_index(file);
        let white_sq = Square::from_parts(file, Rank::from_index(rank));
        let black_sq = Square::from_parts(file, Rank::from_index(7 - rank));
        let white = Position::new([
            Piece::new(PieceId(0), PieceKind::Pawn, Color::White, white_sq),
        ]).unwrap();
        let black = Position::new([
            Piece::new(PieceId(0), PieceKind::Pawn, Color::Black, black_sq),
        ]).unwrap();

        let mirror = |b: Bitboard| -> Bitboard {
            b.into_iter()
                .map(|s| Square::from_parts(s.file(), Rank::from_index(7 - s.rank().index())))
                .collect()
        };
        let w = movegen::candidate_moves(&white, &white.live_pieces()[0]);
        let b = movegen::candidate_moves(&black, &black.live_pieces()[0]);
        prop_assert_eq!(mirror(w.moves), b.moves);
        prop_assert_eq!(w.captures, Bitboard::EMPTY);
        prop_assert_eq!(b.captures, Bitboard::EMPTY);
        prop_assert_eq!(w.moves.len(), if rank == 1 { 2 } else { 1 });
        prop_assert_eq!(
            mirror(white.attack_coverage(Color::White)),
            black.attack_coverage(Color::Black)
        );
        for s in w.moves {
            prop_assert!(s.rank().index() > rank);
        }
    }
}
