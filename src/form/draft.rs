//! 表单工作副本

use serde::{Deserialize, Serialize};

use crate::core::models::ProxyConfig;

/// 代理表单工作副本
/// protocol 与 port 保持用户输入的原始文本，非法输入交由校验层拒绝，
/// 而不是在反序列化阶段失败
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyDraft {
    pub enabled: bool,
    pub protocol: String,
    pub hostname: String,
    pub port: String,
    pub auth_enabled: bool,
    pub auth_username: String,
    pub auth_password: String,
    pub no_proxy: String,
}

impl ProxyDraft {
    /// 从已持久化的代理配置派生工作副本
    pub fn from_config(config: &ProxyConfig) -> Self {
        Self {
            enabled: config.enabled,
            protocol: config.protocol.as_str().to_string(),
            hostname: config.hostname.clone(),
            port: config.port.to_string(),
            auth_enabled: config.auth.enabled,
            auth_username: config.auth.username.clone(),
            auth_password: config.auth.password.clone(),
            no_proxy: config.no_proxy.clone(),
        }
    }
}
