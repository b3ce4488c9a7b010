pub mod fs;
pub mod presenters;

pub use fs::{JsonFileSink, WalkdirAssetSource};
pub use presenters::{present_planned_record, present_report};
