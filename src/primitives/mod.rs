pub mod direction;
pub mod location;
pub mod moves;

pub use self::direction::*;
pub use self::location::*;
pub use self::moves::*;
