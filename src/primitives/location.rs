use bin::*;
use error::Error;
use std::fmt;

const USED: u8 = 0b100;
const PROMOTED: u8 = 0b010;
const OWNER: u8 = 0b001;

/// State of a single square: whether a piece is on it, whether that piece was promoted and which
/// player owns it. The owner of an unused square carries no meaning but is kept as given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq, Default)]
pub struct BoardLocation {
    pub used: bool,
    pub promoted: bool,
    pub owner: bool
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match (self.used, self.owner, self.promoted) {
            (false, _, _) => '.',
            (true, false, false) => 'o',
            (true, false, true) => 'O',
            (true, true, false) => 'x',
            (true, true, true) => 'X'
        })
    }
}

impl Encodable for BoardLocation {
    fn to_bytes(&self) -> Bin {
        vec![self.to_bits()]
    }

    fn from_bytes(bytes: &[u8]) -> Result<BoardLocation, Error> {
        Ok(Self::from_bits(single_byte(bytes)?))
    }
}

impl BoardLocation {
    pub fn new(used: bool, promoted: bool, owner: bool) -> BoardLocation {
        BoardLocation { used, promoted, owner }
    }

    /// A square with nothing on it.
    #[inline]
    pub fn empty() -> BoardLocation {
        BoardLocation::new(false, false, false)
    }

    /// A square holding an unpromoted piece of the given owner.
    #[inline]
    pub fn piece(owner: bool) -> BoardLocation {
        BoardLocation::new(true, false, owner)
    }

    /// Promote the piece, (or do nothing if there is no piece).
    pub fn promote(self) -> BoardLocation {
        BoardLocation { promoted: self.used || self.promoted, ..self }
    }

    /// Check if a piece of the given owner is on this square.
    #[inline]
    pub fn is_owned_by(self, owner: bool) -> bool {
        self.used && self.owner == owner
    }

    /// Pack into the low three bits of a byte: used, promoted, owner from high to low.
    #[inline]
    pub fn to_bits(self) -> u8 {
        (if self.used { USED } else { 0 }) |
        (if self.promoted { PROMOTED } else { 0 }) |
        (if self.owner { OWNER } else { 0 })
    }

    /// Unpack from the low three bits of a byte. Higher bits are ignored.
    #[inline]
    pub fn from_bits(bits: u8) -> BoardLocation {
        BoardLocation::new(bits & USED != 0, bits & PROMOTED != 0, bits & OWNER != 0)
    }
}
