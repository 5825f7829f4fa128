pub mod criteria;
pub mod evaluate;

pub use criteria::{parse_amount, parse_duration, FilterCriteria, FilterPatch, DEFAULT_PRICE_CEILING};
pub use evaluate::{evaluate, matches};
