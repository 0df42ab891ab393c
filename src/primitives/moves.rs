use bin::*;
use error::Error;
use std::fmt;
use super::Direction;

/// A board coordinate which may have stepped off the board, (x, y).
pub type Pos = (i16, i16);

/// Move the piece at (`x_pos`, `y_pos`) diagonally, one step along each axis in the given
/// directions. A jump uses the same move and travels two steps instead of one.
///
/// Coordinates are not bounds checked here; the board rejects moves which leave it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Move {
    pub x_pos: u8,
    pub y_pos: u8,
    pub x_direction: Direction,
    pub y_direction: Direction
}

impl fmt::Display for Move {
    /// One-based coordinates of the origin and the square one step away, e.g. `(2, 3) -> (1, 4)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (x, y) = self.pos();
        let (nx, ny) = self.after_move_pos();
        write!(f, "({}, {}) -> ({}, {})", x + 1, y + 1, nx + 1, ny + 1)
    }
}

impl Encodable for Move {
    /// Pack into one byte, from high to low: x (3 bits), y (3 bits), x direction, y direction.
    /// Only coordinates in 0..7 survive the round trip; higher bits are dropped.
    fn to_bytes(&self) -> Bin {
        vec![
            (self.x_pos & 0b111) << 5 |
            (self.y_pos & 0b111) << 2 |
            self.x_direction.to_bit() << 1 |
            self.y_direction.to_bit()
        ]
    }

    fn from_bytes(bytes: &[u8]) -> Result<Move, Error> {
        let b = single_byte(bytes)?;
        Ok(Move::new(
            b >> 5,
            (b >> 2) & 0b111,
            Direction::from_bit(b >> 1),
            Direction::from_bit(b)
        ))
    }
}

impl Move {
    pub fn new(x_pos: u8, y_pos: u8, x_direction: Direction, y_direction: Direction) -> Move {
        Move { x_pos, y_pos, x_direction, y_direction }
    }

    /// Where the piece starts.
    #[inline]
    pub fn pos(&self) -> Pos {
        (self.x_pos as i16, self.y_pos as i16)
    }

    /// Where the piece lands after a simple move, or the square jumped over.
    #[inline]
    pub fn after_move_pos(&self) -> Pos {
        self.steps(1)
    }

    /// Where the piece lands after a jump.
    #[inline]
    pub fn after_double_move_pos(&self) -> Pos {
        self.steps(2)
    }

    fn steps(&self, n: i16) -> Pos {
        let (x, y) = self.pos();
        (x + self.x_direction.to_one() as i16 * n, y + self.y_direction.to_one() as i16 * n)
    }
}



#[cfg(test)]
mod tests {
    use super::Move;
    use bin::Encodable;
    use primitives::Direction::*;

    #[test]
    fn move_type() {
        let m = Move::new(1, 2, Negative, Positive);
        assert_eq!(m.to_bytes(), vec![0x29]);
        assert_eq!(Move::from_bytes(&m.to_bytes()).unwrap().to_bytes(), m.to_bytes());
        assert_eq!(m.x_pos, 1);
        assert_eq!(m.y_pos, 2);
        assert_eq!(m.x_direction, Negative);
        assert_eq!(m.y_direction, Positive);
        assert_eq!(m.pos(), (1, 2));
        assert_eq!(m.after_move_pos(), (0, 3));
        assert_eq!(m.after_double_move_pos(), (-1, 4));
        assert_eq!(m.to_string(), "(2, 3) -> (1, 4)");
    }

    #[test]
    fn decode() {
        assert_eq!(Move::from_bytes(&[0x29]).unwrap(), Move::new(1, 2, Negative, Positive));
        assert_eq!(Move::from_bytes(&[0xff]).unwrap(), Move::new(7, 7, Positive, Positive));
        assert_eq!(Move::from_bytes(&[0x00]).unwrap(), Move::new(0, 0, Negative, Negative));
        assert!(Move::from_bytes(&[]).is_err());
    }

    #[test]
    fn far_off_board_coordinates() {
        let m = Move::new(200, 255, Positive, Positive);
        assert_eq!(m.pos(), (200, 255));
        assert_eq!(m.after_double_move_pos(), (202, 257));
        assert_eq!(m.to_string(), "(201, 256) -> (202, 257)");
        // only the low three bits of each coordinate are encoded
        assert_eq!(Move::new(9, 0, Positive, Positive).to_bytes(), Move::new(1, 0, Positive, Positive).to_bytes());
    }

    #[test]
    fn every_byte_is_stable() {
        for b in 0..256u16 {
            let m = Move::from_bytes(&[b as u8]).unwrap();
            assert_eq!(m.to_bytes(), vec![b as u8]);
        }
    }
}
