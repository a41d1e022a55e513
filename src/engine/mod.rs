pub mod config;
pub mod error;

pub mod prefix;
pub mod stats;
pub mod stride;

pub use config::Config;
pub use error::{ConfigError, InputError};
pub use prefix::{count_decoratable, decorate, is_decoratable, normalize_markers, SENTINEL};
pub use stats::DecorateStats;
pub use stride::StridePattern;
