//! 表单字段定义
//! 以显式类型化更新取代字符串路径写入

use serde::{Deserialize, Serialize};

/// 代理表单字段，按展示顺序声明
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyField {
    Enabled,
    Protocol,
    Hostname,
    Port,
    AuthEnabled,
    AuthUsername,
    AuthPassword,
    NoProxy,
}

impl ProxyField {
    /// 全部字段，按表单展示顺序
    pub const ALL: [ProxyField; 8] = [
        ProxyField::Enabled,
        ProxyField::Protocol,
        ProxyField::Hostname,
        ProxyField::Port,
        ProxyField::AuthEnabled,
        ProxyField::AuthUsername,
        ProxyField::AuthPassword,
        ProxyField::NoProxy,
    ];

    /// 字段键，用于错误定位与前端绑定
    pub fn key(&self) -> &'static str {
        match self {
            ProxyField::Enabled => "enabled",
            ProxyField::Protocol => "protocol",
            ProxyField::Hostname => "hostname",
            ProxyField::Port => "port",
            ProxyField::AuthEnabled => "auth.enabled",
            ProxyField::AuthUsername => "auth.username",
            ProxyField::AuthPassword => "auth.password",
            ProxyField::NoProxy => "no_proxy",
        }
    }

    /// 表单标签
    pub fn label(&self) -> &'static str {
        match self {
            ProxyField::Enabled => "Enabled",
            ProxyField::Protocol => "Protocol",
            ProxyField::Hostname => "Hostname",
            ProxyField::Port => "Port",
            ProxyField::AuthEnabled => "Auth",
            ProxyField::AuthUsername => "Username",
            ProxyField::AuthPassword => "Password",
            ProxyField::NoProxy => "Proxy Bypass",
        }
    }
}

/// 单字段更新
/// 每个变体携带目标字段的类型化值；布尔字段在此处就已定型，
/// 文本字段保持原始输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FieldPatch {
    Enabled(bool),
    Protocol(String),
    Hostname(String),
    Port(String),
    AuthEnabled(bool),
    AuthUsername(String),
    AuthPassword(String),
    NoProxy(String),
}

impl FieldPatch {
    /// 更新的目标字段
    pub fn field(&self) -> ProxyField {
        match self {
            FieldPatch::Enabled(_) => ProxyField::Enabled,
            FieldPatch::Protocol(_) => ProxyField::Protocol,
            FieldPatch::Hostname(_) => ProxyField::Hostname,
            FieldPatch::Port(_) => ProxyField::Port,
            FieldPatch::AuthEnabled(_) => ProxyField::AuthEnabled,
            FieldPatch::AuthUsername(_) => ProxyField::AuthUsername,
            FieldPatch::AuthPassword(_) => ProxyField::AuthPassword,
            FieldPatch::NoProxy(_) => ProxyField::NoProxy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_wire_format() {
        let patch: FieldPatch =
            serde_json::from_str(r#"{"field": "port", "value": "1080"}"#).unwrap();
        assert_eq!(patch, FieldPatch::Port("1080".to_string()));
        assert_eq!(patch.field(), ProxyField::Port);

        let patch: FieldPatch =
            serde_json::from_str(r#"{"field": "auth_enabled", "value": true}"#).unwrap();
        assert_eq!(patch, FieldPatch::AuthEnabled(true));
        assert_eq!(patch.field(), ProxyField::AuthEnabled);
    }

    #[test]
    fn test_field_keys() {
        assert_eq!(ProxyField::AuthUsername.key(), "auth.username");
        assert_eq!(ProxyField::NoProxy.key(), "no_proxy");
        assert_eq!(ProxyField::ALL.len(), 8);
    }
}
