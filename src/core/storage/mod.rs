//! 存储层

mod preferences;

pub use preferences::PreferencesStorage;
