pub mod category;
pub mod level;
pub mod record;

pub use category::{Category, CategoryCode};
pub use level::{Level, LevelCode};
pub use record::LogRecord;
