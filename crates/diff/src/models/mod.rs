mod excerpt;
mod report;

pub use self::excerpt::Excerpt;
pub use self::report::{ChangeReport, Modification};
