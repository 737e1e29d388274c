mod outcome;
mod report;

pub use outcome::Outcome;
pub use report::{REPORT_TITLE, Report};
