mod cache;
mod error;
mod loader;
mod src;

pub use cache::CachedCalendarSrc;
pub use error::LoadError;
pub use loader::{parse_definition, CalendarLoader};
pub use src::CalendarSrc;
