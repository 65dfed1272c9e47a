//! 偏好设置存储服务

use once_cell::sync::Lazy;
use std::fs;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::models::Preferences;
use crate::core::traits::{PreferencesStore, StorageConfig};

// 偏好设置文件锁，防止并发写入
static PREFERENCES_FILE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// 偏好设置存储服务
pub struct PreferencesStorage;

impl PreferencesStorage {
    /// 加载偏好设置
    /// 文件不存在时返回默认配置并落盘
    pub fn load<S: StorageConfig>(storage: &S) -> Result<Preferences, String> {
        let path = storage.preferences_path();

        if !path.exists() {
            let defaults = Preferences::default();
            Self::save(storage, &defaults)?;
            return Ok(defaults);
        }

        let content =
            fs::read_to_string(&path).map_err(|e| format!("读取偏好设置文件失败: {}", e))?;

        let preferences: Preferences =
            serde_json::from_str(&content).map_err(|e| format!("解析偏好设置文件失败: {}", e))?;

        Ok(preferences)
    }

    /// 保存偏好设置 (原子化写入)
    pub fn save<S: StorageConfig>(storage: &S, preferences: &Preferences) -> Result<(), String> {
        let _lock = PREFERENCES_FILE_LOCK
            .lock()
            .map_err(|e| format!("获取锁失败: {}", e))?;

        let path = storage.preferences_path();

        // 确保目录存在
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("创建数据目录失败: {}", e))?;
        }

        let content = serde_json::to_string_pretty(preferences)
            .map_err(|e| format!("序列化偏好设置失败: {}", e))?;

        // 原子写入：先写入临时文件，再重命名
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content).map_err(|e| format!("写入临时文件失败: {}", e))?;

        fs::rename(&temp_path, &path).map_err(|e| format!("重命名文件失败: {}", e))?;

        Ok(())
    }
}

#[async_trait]
impl<S: StorageConfig> PreferencesStore for S {
    async fn get_preferences(&self) -> Result<Preferences, String> {
        PreferencesStorage::load(self)
    }

    async fn set_preferences(&self, preferences: &Preferences) -> Result<(), String> {
        PreferencesStorage::save(self, preferences)
    }
}
