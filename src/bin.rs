use error::Error;

pub type Bin = Vec<u8>;

/// Anything with a canonical, compact byte form. Whatever `to_bytes` produces must be accepted by
/// `from_bytes`, and decoding then re-encoding must give back the same bytes.
pub trait Encodable {
    fn to_bytes(&self) -> Bin;

    /// Read a value back from its byte form. Types which only know how to encode themselves keep
    /// this default and report `NotImplemented`, which is distinct from a `Decode` error on bad
    /// input.
    fn from_bytes(_bytes: &[u8]) -> Result<Self, Error> where Self: Sized {
        Err(Error::NotImplemented("from_bytes"))
    }
}

/// Get the single byte an encoding of one byte is expected to have.
#[inline]
pub fn single_byte(bytes: &[u8]) -> Result<u8, Error> {
    match bytes.len() {
        1 => Ok(bytes[0]),
        n => Err(Error::Decode(format!("Expected 1 byte, got {}.", n)))
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    struct EncodeOnly;
    impl Encodable for EncodeOnly {
        fn to_bytes(&self) -> Bin { vec![0] }
    }

    #[test]
    fn decode_not_implemented() {
        assert_eq!(EncodeOnly.to_bytes(), vec![0]);
        match EncodeOnly::from_bytes(b"") {
            Err(Error::NotImplemented(_)) => (),
            _ => panic!("expected NotImplemented")
        }
    }

    #[test]
    fn single() {
        assert_eq!(single_byte(&[0x29]).unwrap(), 0x29);
        assert!(single_byte(&[]).is_err());
        assert!(single_byte(&[1, 2]).is_err());
    }
}
