//! 核心 trait 定义
//! 用于解耦业务逻辑与 Web/桌面运行时

use async_trait::async_trait;
use serde::Serialize;
use std::path::PathBuf;

use crate::core::models::Preferences;

/// 事件发射器 trait
/// 桌面模式下对接外壳的事件总线
/// Web 模式下可选择 WebSocket 推送或忽略
pub trait EventEmitter: Send + Sync {
    fn emit<T: Serialize + Clone>(&self, event: &str, payload: T);
}

/// 空事件发射器 (Web 模式使用)
pub struct NoopEmitter;

impl EventEmitter for NoopEmitter {
    fn emit<T: Serialize + Clone>(&self, _event: &str, _payload: T) {
        // Web 模式下不发射事件
    }
}

/// 存储配置 trait
/// 抽象数据目录和文件系统操作
pub trait StorageConfig: Send + Sync {
    /// 获取数据目录路径
    fn data_dir(&self) -> PathBuf;

    /// 获取偏好设置文件路径
    fn preferences_path(&self) -> PathBuf {
        self.data_dir().join("preferences.json")
    }

    /// 获取日志目录路径
    fn logs_dir(&self) -> PathBuf {
        self.data_dir().join("logs")
    }
}

/// 偏好设置存储契约
/// 表单只通过该契约读写持久化状态，不直接接触存储引擎
#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// 读取完整偏好设置
    async fn get_preferences(&self) -> Result<Preferences, String>;

    /// 持久化完整偏好设置 (整体替换)
    async fn set_preferences(&self, preferences: &Preferences) -> Result<(), String>;
}

/// 默认存储配置 (使用 ~/.proxy_settings/)
pub struct DefaultStorageConfig {
    data_dir: PathBuf,
}

impl DefaultStorageConfig {
    pub fn new() -> Result<Self, String> {
        let home = dirs::home_dir().ok_or_else(|| "无法获取用户主目录".to_string())?;
        Self::with_path(home.join(".proxy_settings"))
    }

    /// 从指定路径创建
    pub fn with_path(data_dir: PathBuf) -> Result<Self, String> {
        // 确保目录存在
        std::fs::create_dir_all(&data_dir).map_err(|e| format!("创建数据目录失败: {}", e))?;
        std::fs::create_dir_all(data_dir.join("logs"))
            .map_err(|e| format!("创建日志目录失败: {}", e))?;

        Ok(Self { data_dir })
    }
}

impl StorageConfig for DefaultStorageConfig {
    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }
}
