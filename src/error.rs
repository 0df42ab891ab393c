use std::error::Error as StdErr;
use std::fmt;

/// Some things which can go wrong when building, reading or playing on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A board was built from the wrong number of squares.
    Shape(usize),
    /// A coordinate outside of the board was looked up.
    Lookup(i16, i16),
    /// A move broke one of the rules; the string names the rule.
    InvalidMove(String),
    /// The type can encode itself but does not know how to decode.
    NotImplemented(&'static str),
    /// The bytes given could not be decoded.
    Decode(String)
}

impl StdErr for Error {
    fn description(&self) -> &str {
        use self::Error::*;
        match *self {
            Shape(_) => "A board must be made of exactly 64 squares.",
            Lookup(..) => "The coordinate specified is not on the board.",
            InvalidMove(_) => "Cannot move the piece in that way.",
            NotImplemented(_) => "Decoding is not implemented for this type.",
            Decode(_) => "The data could not be decoded."
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::Error::*;
        #[allow(deprecated)]
        let desc = self.description();
        match *self {
            Shape(n) => write!(f, "{} (got {})", desc, n),
            Lookup(x, y) => write!(f, "{} ({}, {})", desc, x, y),
            InvalidMove(ref why) => write!(f, "{} {}", desc, why),
            NotImplemented(name) => write!(f, "{} ({})", desc, name),
            Decode(ref why) => write!(f, "{} {}", desc, why)
        }
    }
}

/// Shorthand used by the move validation: turn a failed condition into an `InvalidMove`.
#[inline]
pub fn assert_valid_move(cond: bool, why: &str) -> Result<(), Error> {
    if cond { Ok(()) } else { Err(Error::InvalidMove(why.into())) }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::Shape(0).to_string(), "A board must be made of exactly 64 squares. (got 0)");
        assert_eq!(Error::Lookup(-1, 4).to_string(), "The coordinate specified is not on the board. (-1, 4)");
        assert!(Error::InvalidMove("Cannot move nothing.".into()).to_string().ends_with("Cannot move nothing."));
    }

    #[test]
    fn assert_valid() {
        assert!(assert_valid_move(true, "unused").is_ok());
        assert_eq!(assert_valid_move(false, "Wrong player.").unwrap_err(), Error::InvalidMove("Wrong player.".into()));
    }
}
