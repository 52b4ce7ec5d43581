pub mod error;
pub mod types;

pub use error::{BotgridError, Result};
pub use types::{ScorePair, Side};
