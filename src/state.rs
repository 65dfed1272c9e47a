//! Web 应用状态

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use tokio::sync::RwLock;

use crate::core::notify::NotificationStore;
use crate::core::storage::PreferencesStorage;
use crate::core::traits::{DefaultStorageConfig, NoopEmitter};
use crate::form::ProxyForm;

/// Web 应用状态
pub struct AppState {
    pub storage: DefaultStorageConfig,
    pub emitter: NoopEmitter,
    /// 代理设置表单 (单实例，独占工作副本)
    pub form: RwLock<ProxyForm>,
    pub notifications: NotificationStore,
    /// 在途提交标记，拦截重复保存
    pub submitting: AtomicBool,
}

impl AppState {
    pub fn new() -> Result<Self, String> {
        let storage = DefaultStorageConfig::new()?;
        Self::init(storage)
    }

    /// 从指定数据目录创建
    pub fn with_data_dir(data_dir: PathBuf) -> Result<Self, String> {
        let storage = DefaultStorageConfig::with_path(data_dir)?;
        Self::init(storage)
    }

    fn init(storage: DefaultStorageConfig) -> Result<Self, String> {
        // 启动时加载偏好设置并用其初始化表单
        let preferences = PreferencesStorage::load(&storage)?;

        Ok(Self {
            storage,
            emitter: NoopEmitter,
            form: RwLock::new(ProxyForm::new(&preferences)),
            notifications: NotificationStore::default(),
            submitting: AtomicBool::new(false),
        })
    }
}
