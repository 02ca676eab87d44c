mod east_asian_width;
mod emoji;
mod error;
mod range;
mod record;

pub use self::east_asian_width::*;
pub use self::emoji::*;
pub use self::error::*;
pub use self::range::*;
pub use self::record::*;
