use std::fmt;
use std::slice::Iter;

/// Which way along one axis a piece travels. Also used to say which way is "forward" for a player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Direction {
    Positive, Negative
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_one())
    }
}

impl Direction {
    /// An iterator over both directions, `Positive` first. Move generation relies on this order.
    pub fn all() -> Iter<'static, Direction> {
        use self::Direction::*;
        static DIRECTIONS: [Direction; 2] = [Positive, Negative];
        DIRECTIONS.iter()
    }

    /// The unit step for this direction.
    #[inline]
    pub fn to_one(self) -> i8 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => -1
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive
        }
    }

    /// The forward direction of a player. The `false` owner starts on the low rows and moves up the
    /// board, the `true` owner starts on the high rows and moves down.
    #[inline]
    pub fn for_owner(owner: bool) -> Direction {
        if owner { Direction::Negative } else { Direction::Positive }
    }

    /// The owner whose forward direction this is.
    #[inline]
    pub fn owner(self) -> bool {
        self == Direction::Negative
    }

    /// The last row reachable moving in this direction, where pieces get promoted.
    #[inline]
    pub fn far_row(self) -> i16 {
        match self {
            Direction::Positive => 7,
            Direction::Negative => 0
        }
    }

    #[inline]
    pub(crate) fn to_bit(self) -> u8 {
        match self {
            Direction::Positive => 1,
            Direction::Negative => 0
        }
    }

    #[inline]
    pub(crate) fn from_bit(bit: u8) -> Direction {
        if bit & 1 == 1 { Direction::Positive } else { Direction::Negative }
    }
}



#[cfg(test)]
mod tests {
    use super::Direction::*;
    use super::Direction;

    #[test]
    fn to_one() {
        assert_eq!(Positive.to_one(), 1);
        assert_eq!(Negative.to_one(), -1);
    }

    #[test]
    fn display() {
        assert_eq!(Negative.to_string(), "-1");
        assert_eq!(Positive.to_string(), "1");
    }

    #[test]
    fn owners() {
        assert_eq!(Direction::for_owner(false), Positive);
        assert_eq!(Direction::for_owner(true), Negative);
        assert!(Negative.owner());
        assert!(!Positive.owner());
        assert_eq!(Positive.opposite(), Negative);
        assert_eq!(Positive.far_row(), 7);
        assert_eq!(Negative.far_row(), 0);
    }

    #[test]
    fn all_in_order() {
        let dirs: Vec<Direction> = Direction::all().cloned().collect();
        assert_eq!(dirs, vec![Positive, Negative]);
    }
}
