//! 核心数据模型
//! 不依赖运行时的数据结构定义

mod preferences;
mod proxy_config;

pub use preferences::Preferences;
pub use proxy_config::{ProxyAuthConfig, ProxyConfig, ProxyProtocol};
