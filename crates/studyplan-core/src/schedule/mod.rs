//! Day schedules: clock times, time-boxed items, and the base day template.

mod item;
mod template;
mod time;

pub use item::{ItemKind, ScheduleItem};
pub use template::DayTemplate;
pub use time::TimeOfDay;
