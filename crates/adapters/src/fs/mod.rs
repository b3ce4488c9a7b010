mod scanner;
mod sink;

pub use scanner::WalkdirAssetSource;
pub use sink::JsonFileSink;
