use crate::types::Square;
use derive_more::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::fmt;
use std::iter::{FromIterator, IntoIterator};

/// Set of squares
///
/// Bit `i` is set iff the square with index `i` belongs to the set.
#[derive(
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub const fn from_raw(val: u64) -> Bitboard {
        Bitboard(val)
    }

    pub const fn from_square(sq: Square) -> Bitboard {
        Bitboard(1_u64 << sq.index())
    }

    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | (1_u64 << sq.index()))
    }

    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !(1_u64 << sq.index()))
    }

    pub fn set(&mut self, sq: Square) {
        *self = self.with(sq);
    }

    pub fn unset(&mut self, sq: Square) {
        *self = self.without(sq);
    }

    pub const fn has(&self, sq: Square) -> bool {
        ((self.0 >> sq.index()) & 1) != 0
    }

    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    pub const fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_nonempty(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Bitboard({})", self)
    }
}

/// Formats the set rank by rank, from rank 8 down to rank 1, each rank from file `a` to `h`
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (0..8).rev() {
            if row != 7 {
                write!(f, "/")?;
            }
            for col in 0..8 {
                let bit = (self.0 >> (row * 8 + col)) & 1;
                write!(f, "{}", bit)?;
            }
        }
        Ok(())
    }
}

pub struct Iter(u64);

impl Iterator for Iter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros();
        self.0 &= self.0.wrapping_sub(1_u64);
        unsafe { Some(Square::from_index_unchecked(bit as usize)) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        let mut res = Bitboard::EMPTY;
        for sq in iter {
            res.set(sq);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};

    #[test]
    fn test_iter() {
        let bb = Bitboard::EMPTY
            .with(Square::from_parts(File::A, Rank::R4))
            .with(Square::from_parts(File::E, Rank::R2))
            .with(Square::from_parts(File::F, Rank::R3));
        assert_eq!(
            bb.into_iter().collect::<Vec<_>>(),
            vec![
                Square::from_parts(File::E, Rank::R2),
                Square::from_parts(File::F, Rank::R3),
                Square::from_parts(File::A, Rank::R4),
            ],
        );
        assert_eq!(bb.into_iter().len(), 3);
        assert_eq!(bb.into_iter().collect::<Bitboard>(), bb);
    }

    #[test]
    fn test_bitops() {
        let ca = Square::from_parts(File::A, Rank::R4);
        let cb = Square::from_parts(File::E, Rank::R2);
        let cc = Square::from_parts(File::F, Rank::R3);

        let bb1 = Bitboard::EMPTY.with(ca).with(cb);
        let bb2 = Bitboard::EMPTY.with(cb).with(cc);
        assert_eq!(bb1 & bb2, Bitboard::EMPTY.with(cb));
        assert_eq!(bb1 | bb2, Bitboard::EMPTY.with(ca).with(cb).with(cc));
        assert_eq!(bb1 ^ bb2, Bitboard::EMPTY.with(ca).with(cc));

        assert_eq!((!bb1).into_iter().count(), 62);
        assert_eq!((!bb1).len(), 62);
        assert!(bb1.has(ca));
        assert!(!bb1.without(ca).has(ca));
    }

    #[test]
    fn test_format() {
        let bb = Bitboard::EMPTY
            .with(Square::from_parts(File::A, Rank::R4))
            .with(Square::from_parts(File::E, Rank::R2))
            .with(Square::from_parts(File::F, Rank::R3))
            .with(Square::from_parts(File::H, Rank::R8));
        assert_eq!(
            bb.to_string(),
            "00000001/00000000/00000000/00000000/10000000/00000100/00001000/00000000"
        );
    }
}
