//! 表单校验规则
//! 声明式 schema：每个字段一个带标签结果的校验函数，失败挂接到具体字段

use thiserror::Error;

use super::draft::ProxyDraft;
use super::field::ProxyField;
use crate::core::models::{ProxyAuthConfig, ProxyConfig, ProxyProtocol};

/// 文本字段最大长度 (字符数)
pub const MAX_TEXT_LEN: usize = 1024;
/// 端口下界
pub const PORT_MIN: i64 = 0;
/// 端口上界
pub const PORT_MAX: i64 = 65535;

/// 校验违例
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// 枚举值非法
    #[error("must be one of: {allowed}")]
    Schema { allowed: &'static str },

    /// 文本超长
    #[error("must be at most {max} characters")]
    Length { max: usize },

    /// 数值缺失、非数值或超界
    #[error("must be a number between {min} and {max}")]
    Range { min: i64, max: i64 },
}

/// 挂接到字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ProxyField,
    pub message: String,
}

impl FieldError {
    fn new(field: ProxyField, violation: Violation) -> Self {
        Self {
            field,
            message: violation.to_string(),
        }
    }
}

/// 校验协议枚举
pub fn validate_protocol(value: &str) -> Result<ProxyProtocol, Violation> {
    value.parse::<ProxyProtocol>().map_err(|_| Violation::Schema {
        allowed: "http, https, socks5",
    })
}

/// 校验文本长度
pub fn validate_text(value: &str) -> Result<String, Violation> {
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(Violation::Length { max: MAX_TEXT_LEN });
    }
    Ok(value.to_string())
}

/// 校验端口范围
/// 空串与非数值输入同样按范围违例处理
pub fn validate_port(value: &str) -> Result<u16, Violation> {
    let range = Violation::Range {
        min: PORT_MIN,
        max: PORT_MAX,
    };

    let parsed: i64 = value.trim().parse().map_err(|_| range.clone())?;
    if !(PORT_MIN..=PORT_MAX).contains(&parsed) {
        return Err(range);
    }

    Ok(parsed as u16)
}

/// 校验单个字段 (编辑过程中的即时反馈)
pub fn validate_field(draft: &ProxyDraft, field: ProxyField) -> Option<FieldError> {
    let violation = match field {
        // 布尔字段在 FieldPatch 层已定型，无进一步约束
        ProxyField::Enabled | ProxyField::AuthEnabled => None,
        ProxyField::Protocol => validate_protocol(&draft.protocol).err(),
        ProxyField::Hostname => validate_text(&draft.hostname).err(),
        ProxyField::Port => validate_port(&draft.port).err(),
        ProxyField::AuthUsername => validate_text(&draft.auth_username).err(),
        ProxyField::AuthPassword => validate_text(&draft.auth_password).err(),
        ProxyField::NoProxy => validate_text(&draft.no_proxy).err(),
    };

    violation.map(|v| FieldError::new(field, v))
}

/// 全表单校验
/// 成功时产出类型化的 ProxyConfig，失败时按字段声明顺序收集所有错误
pub fn validate(draft: &ProxyDraft) -> Result<ProxyConfig, Vec<FieldError>> {
    let mut errors = Vec::new();

    let protocol = check(ProxyField::Protocol, validate_protocol(&draft.protocol), &mut errors);
    let hostname = check(ProxyField::Hostname, validate_text(&draft.hostname), &mut errors);
    let port = check(ProxyField::Port, validate_port(&draft.port), &mut errors);
    let username = check(
        ProxyField::AuthUsername,
        validate_text(&draft.auth_username),
        &mut errors,
    );
    let password = check(
        ProxyField::AuthPassword,
        validate_text(&draft.auth_password),
        &mut errors,
    );
    let no_proxy = check(ProxyField::NoProxy, validate_text(&draft.no_proxy), &mut errors);

    match (protocol, hostname, port, username, password, no_proxy) {
        (Some(protocol), Some(hostname), Some(port), Some(username), Some(password), Some(no_proxy))
            if errors.is_empty() =>
        {
            Ok(ProxyConfig {
                enabled: draft.enabled,
                protocol,
                hostname,
                port,
                auth: ProxyAuthConfig {
                    enabled: draft.auth_enabled,
                    username,
                    password,
                },
                no_proxy,
            })
        }
        _ => Err(errors),
    }
}

fn check<T>(
    field: ProxyField,
    result: Result<T, Violation>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            errors.push(FieldError::new(field, violation));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ProxyConfig;

    fn valid_draft() -> ProxyDraft {
        ProxyDraft::from_config(&ProxyConfig::default())
    }

    #[test]
    fn test_port_boundaries() {
        assert_eq!(validate_port("0").unwrap(), 0);
        assert_eq!(validate_port("65535").unwrap(), 65535);
        assert!(validate_port("-1").is_err());
        assert!(validate_port("65536").is_err());
    }

    #[test]
    fn test_port_non_numeric() {
        assert!(validate_port("").is_err());
        assert!(validate_port("abc").is_err());
        assert!(validate_port("10.5").is_err());
    }

    #[test]
    fn test_text_length_boundary() {
        let max = "h".repeat(1024);
        assert_eq!(validate_text(&max).unwrap(), max);

        let over = "h".repeat(1025);
        assert_eq!(validate_text(&over).unwrap_err(), Violation::Length { max: 1024 });
    }

    #[test]
    fn test_protocol_enum() {
        assert_eq!(validate_protocol("socks5").unwrap(), ProxyProtocol::Socks5);
        assert!(matches!(
            validate_protocol("socks4").unwrap_err(),
            Violation::Schema { .. }
        ));
    }

    #[test]
    fn test_validate_produces_typed_config() {
        let mut draft = valid_draft();
        draft.enabled = true;
        draft.protocol = "socks5".to_string();
        draft.hostname = "proxy.local".to_string();
        draft.port = "1080".to_string();

        let config = validate(&draft).unwrap();
        assert!(config.enabled);
        assert_eq!(config.protocol, ProxyProtocol::Socks5);
        assert_eq!(config.hostname, "proxy.local");
        assert_eq!(config.port, 1080);
        assert_eq!(config.no_proxy, "");
    }

    #[test]
    fn test_validate_collects_errors_in_field_order() {
        let mut draft = valid_draft();
        draft.protocol = "socks4".to_string();
        draft.port = "99999".to_string();
        draft.auth_password = "p".repeat(1025);

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, ProxyField::Protocol);
        assert_eq!(errors[1].field, ProxyField::Port);
        assert_eq!(errors[2].field, ProxyField::AuthPassword);
    }

    #[test]
    fn test_field_errors_carry_messages() {
        let mut draft = valid_draft();
        draft.port = "99999".to_string();

        let errors = validate(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "must be a number between 0 and 65535");
    }
}
