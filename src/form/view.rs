//! 表单视图
//! 面向前端的声明式渲染：控件、绑定值、内联错误与提交可用性

use serde::Serialize;
use serde_json::json;

use super::controller::ProxyForm;
use super::field::ProxyField;
use crate::core::models::ProxyProtocol;

/// 控件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Checkbox,
    Radio,
    Text,
    Number,
}

/// 单个表单控件
#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub control: ControlKind,
    pub value: serde_json::Value,
    /// 渲染层应遮蔽显示的字段
    pub secret: bool,
    /// 可选值 (radio 组)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<&'static str>>,
    /// 仅在字段 touched 且校验失败时出现
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 表单视图
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FieldView>,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
}

/// 将控制器状态渲染为视图
pub fn render(form: &ProxyForm, submit_disabled: bool) -> FormView {
    let draft = form.draft();

    let fields = ProxyField::ALL
        .iter()
        .map(|&field| {
            let (control, value, options, secret) = match field {
                ProxyField::Enabled => (ControlKind::Checkbox, json!(draft.enabled), None, false),
                ProxyField::Protocol => (
                    ControlKind::Radio,
                    json!(draft.protocol),
                    Some(ProxyProtocol::ALLOWED.to_vec()),
                    false,
                ),
                ProxyField::Hostname => (ControlKind::Text, json!(draft.hostname), None, false),
                ProxyField::Port => (ControlKind::Number, json!(draft.port), None, false),
                ProxyField::AuthEnabled => {
                    (ControlKind::Checkbox, json!(draft.auth_enabled), None, false)
                }
                ProxyField::AuthUsername => {
                    (ControlKind::Text, json!(draft.auth_username), None, false)
                }
                ProxyField::AuthPassword => {
                    (ControlKind::Text, json!(draft.auth_password), None, true)
                }
                ProxyField::NoProxy => (ControlKind::Text, json!(draft.no_proxy), None, false),
            };

            // 内联错误只在字段被交互过之后展示
            let error = if form.is_touched(field) {
                form.error(field).map(str::to_string)
            } else {
                None
            };

            FieldView {
                key: field.key(),
                label: field.label(),
                control,
                value,
                secret,
                options,
                error,
            }
        })
        .collect();

    FormView {
        title: "Proxy Settings",
        fields,
        submit_label: "Save",
        submit_disabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Preferences;
    use crate::form::field::FieldPatch;

    #[test]
    fn test_render_field_order_and_labels() {
        let form = ProxyForm::new(&Preferences::default());
        let view = render(&form, false);

        assert_eq!(view.title, "Proxy Settings");
        assert_eq!(view.submit_label, "Save");
        assert!(!view.submit_disabled);

        let keys: Vec<&str> = view.fields.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            vec![
                "enabled",
                "protocol",
                "hostname",
                "port",
                "auth.enabled",
                "auth.username",
                "auth.password",
                "no_proxy"
            ]
        );
    }

    #[test]
    fn test_protocol_radio_options() {
        let form = ProxyForm::new(&Preferences::default());
        let view = render(&form, false);

        let protocol = &view.fields[1];
        assert_eq!(protocol.control, ControlKind::Radio);
        assert_eq!(protocol.options, Some(vec!["http", "https", "socks5"]));
        assert_eq!(protocol.value, json!("http"));
    }

    #[test]
    fn test_password_is_marked_secret() {
        let form = ProxyForm::new(&Preferences::default());
        let view = render(&form, false);

        let password = view.fields.iter().find(|f| f.key == "auth.password").unwrap();
        assert!(password.secret);
        assert!(!view.fields[2].secret);
    }

    #[test]
    fn test_error_shown_only_when_touched() {
        let mut form = ProxyForm::new(&Preferences::default());
        let view = render(&form, false);
        assert!(view.fields.iter().all(|f| f.error.is_none()));

        form.apply(FieldPatch::Port("99999".to_string()));
        let view = render(&form, false);
        let port = view.fields.iter().find(|f| f.key == "port").unwrap();
        assert_eq!(
            port.error.as_deref(),
            Some("must be a number between 0 and 65535")
        );
    }

    #[test]
    fn test_submit_disabled_passthrough() {
        let form = ProxyForm::new(&Preferences::default());
        let view = render(&form, true);
        assert!(view.submit_disabled);
    }
}
