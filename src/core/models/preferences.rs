//! 应用偏好设置模型

use super::ProxyConfig;
use serde::{Deserialize, Serialize};

/// 应用偏好设置
/// 表单只修改其中的 proxy 段，写回时整体替换
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub language: String,
    pub theme: String,
    pub proxy: ProxyConfig,
}

impl Preferences {
    pub fn new() -> Self {
        Self {
            language: "en".to_string(),
            theme: "system".to_string(),
            proxy: ProxyConfig::default(),
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self::new()
    }
}
