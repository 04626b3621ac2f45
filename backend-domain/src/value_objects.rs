// Domain value objects
pub mod event_kind;
pub mod weekday;

pub use event_kind::*;
pub use weekday::*;
