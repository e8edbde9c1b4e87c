pub mod error;
pub mod period;
pub mod time_set;

pub use error::*;
pub use period::*;
pub use time_set::*;
