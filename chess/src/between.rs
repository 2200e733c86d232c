use crate::bitboard::Bitboard;
use crate::types::Square;

#[inline]
const fn bb(val: u64) -> Bitboard {
    Bitboard::from_raw(val)
}

include!(concat!(env!("OUT_DIR"), "/between.rs"));

/// Returns the squares strictly between `src` and `dst`
///
/// If the squares are not on a common line or diagonal, the result is empty.
#[inline]
pub fn strict(src: Square, dst: Square) -> Bitboard {
    BETWEEN[src.index()][dst.index()]
}

#[inline]
pub fn is_path_clear(src: Square, dst: Square, occupied: Bitboard) -> bool {
    (strict(src, dst) & occupied).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    #[test]
    fn test_strict() {
        assert_eq!(
            strict(sq("a1"), sq("d4")),
            Bitboard::EMPTY.with(sq("b2")).with(sq("c3"))
        );
        assert_eq!(strict(sq("d4"), sq("a1")), strict(sq("a1"), sq("d4")));
        assert_eq!(
            strict(sq("e1"), sq("e4")),
            Bitboard::EMPTY.with(sq("e2")).with(sq("e3"))
        );
        assert_eq!(strict(sq("e1"), sq("e2")), Bitboard::EMPTY);
        assert_eq!(strict(sq("b1"), sq("c3")), Bitboard::EMPTY);
        assert_eq!(strict(sq("a1"), sq("a1")), Bitboard::EMPTY);
    }

    #[test]
    fn test_path_clear() {
        let occupied = Bitboard::EMPTY.with(sq("c3"));
        assert!(!is_path_clear(sq("a1"), sq("d4"), occupied));
        assert!(is_path_clear(sq("a1"), sq("c3"), occupied));
        assert!(is_path_clear(sq("a1"), sq("a8"), occupied));
    }
}
