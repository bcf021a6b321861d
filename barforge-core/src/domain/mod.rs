//! Domain types for the fixture dataset.

pub mod events;
pub mod row;
pub mod ticker;

pub use events::{ExDividendEvent, MarketShock};
pub use row::DailyRow;
pub use ticker::TickerSpec;

/// Symbol type alias
pub type Symbol = String;
