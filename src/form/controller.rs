//! 表单控制器
//! 持有工作副本、touched 标记与字段错误，驱动提交与外部同步

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::draft::ProxyDraft;
use super::field::{FieldPatch, ProxyField};
use super::validation;
use crate::core::models::Preferences;
use crate::core::notify::{NotificationLevel, NotificationStore};
use crate::core::traits::{EventEmitter, PreferencesStore};

/// 保存成功后的用户提示
pub const SAVED_MESSAGE: &str = "Proxy settings updated successfully.";

/// 提交结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitOutcome {
    /// 校验通过且已持久化
    Saved,
    /// 校验未通过，提交被拦截
    Rejected,
    /// 持久化失败，表单状态保持不变
    Failed,
}

/// 代理设置表单
/// 工作副本始终是持久化状态的派生，保存或外部同步时整体替换
pub struct ProxyForm {
    /// 外部偏好设置的最近一次快照
    preferences: Preferences,
    /// 工作副本
    draft: ProxyDraft,
    /// 用户交互过的字段
    touched: HashSet<ProxyField>,
    /// 字段错误
    errors: HashMap<ProxyField, String>,
}

impl ProxyForm {
    /// 从外部偏好设置初始化
    /// 缺失的字段与子对象在反序列化阶段已补齐默认值
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            preferences: preferences.clone(),
            draft: ProxyDraft::from_config(&preferences.proxy),
            touched: HashSet::new(),
            errors: HashMap::new(),
        }
    }

    /// 外部偏好设置变化时重置工作副本
    /// 未保存的编辑被丢弃：同步时外部状态优先
    pub fn sync_external(&mut self, preferences: &Preferences) {
        self.preferences = preferences.clone();
        self.draft = ProxyDraft::from_config(&preferences.proxy);
        self.touched.clear();
        self.errors.clear();
    }

    /// 应用单字段更新
    /// 标记字段 touched，并重算该字段的即时错误
    pub fn apply(&mut self, patch: FieldPatch) {
        let field = patch.field();

        match patch {
            FieldPatch::Enabled(v) => self.draft.enabled = v,
            FieldPatch::Protocol(v) => self.draft.protocol = v,
            FieldPatch::Hostname(v) => self.draft.hostname = v,
            FieldPatch::Port(v) => self.draft.port = v,
            FieldPatch::AuthEnabled(v) => self.draft.auth_enabled = v,
            FieldPatch::AuthUsername(v) => self.draft.auth_username = v,
            FieldPatch::AuthPassword(v) => self.draft.auth_password = v,
            FieldPatch::NoProxy(v) => self.draft.no_proxy = v,
        }

        self.touched.insert(field);
        match validation::validate_field(&self.draft, field) {
            Some(err) => {
                self.errors.insert(field, err.message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// 提交表单
    /// 校验失败时拦截提交并标记所有字段 touched；
    /// 校验通过时将工作副本合并进偏好聚合后整体写入存储
    pub async fn submit<P, E>(
        &mut self,
        store: &P,
        emitter: &E,
        notifications: &NotificationStore,
    ) -> SubmitOutcome
    where
        P: PreferencesStore,
        E: EventEmitter,
    {
        let config = match validation::validate(&self.draft) {
            Ok(config) => config,
            Err(field_errors) => {
                self.touched.extend(ProxyField::ALL);
                self.errors = field_errors
                    .into_iter()
                    .map(|e| (e.field, e.message))
                    .collect();
                return SubmitOutcome::Rejected;
            }
        };

        self.errors.clear();

        let mut updated = self.preferences.clone();
        updated.proxy = config;

        match store.set_preferences(&updated).await {
            Ok(()) => {
                emitter.emit("preferences-updated", &updated);
                notifications.push(NotificationLevel::Success, SAVED_MESSAGE);
                // 保存即同步：工作副本重置为刚落盘的状态
                self.sync_external(&updated);
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::error!("保存代理设置失败: {}", e);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn draft(&self) -> &ProxyDraft {
        &self.draft
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn is_touched(&self, field: ProxyField) -> bool {
        self.touched.contains(&field)
    }

    pub fn error(&self, field: ProxyField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// 是否存在校验错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
