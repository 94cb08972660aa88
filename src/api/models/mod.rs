pub mod adverse_events;
pub mod enforcement;
pub mod historical;
pub mod warning_letters;

pub use adverse_events::*;
pub use enforcement::*;
pub use historical::*;
pub use warning_letters::*;
