//! 代理配置模型

use serde::{Deserialize, Serialize};

/// 代理协议
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProxyProtocol {
    #[default]
    Http,
    Https,
    Socks5,
}

impl ProxyProtocol {
    /// 表单允许的协议值，按展示顺序
    pub const ALLOWED: [&'static str; 3] = ["http", "https", "socks5"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProxyProtocol::Http => "http",
            ProxyProtocol::Https => "https",
            ProxyProtocol::Socks5 => "socks5",
        }
    }
}

impl std::str::FromStr for ProxyProtocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(ProxyProtocol::Http),
            "https" => Ok(ProxyProtocol::Https),
            "socks5" => Ok(ProxyProtocol::Socks5),
            other => Err(format!("未知代理协议: {}", other)),
        }
    }
}

/// 代理认证配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProxyAuthConfig {
    /// 是否启用认证
    pub enabled: bool,

    /// 用户名
    pub username: String,

    /// 密码
    pub password: String,
}

/// 代理配置
/// 所有字段都有默认值，缺失字段在反序列化时补齐
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// 是否启用代理
    pub enabled: bool,

    /// 代理协议
    pub protocol: ProxyProtocol,

    /// 代理主机名
    pub hostname: String,

    /// 代理端口
    pub port: u16,

    /// 认证配置
    pub auth: ProxyAuthConfig,

    /// 代理绕过列表 (逗号分隔的主机模式)
    pub no_proxy: String,
}
