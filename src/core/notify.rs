//! 通知存储
//! 使用内存环形缓冲区存储用户可见的临时通知

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// 通知条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub timestamp: i64,
    pub level: NotificationLevel,
    pub message: String,
}

/// 通知存储（环形缓冲区）
pub struct NotificationStore {
    entries: RwLock<VecDeque<Notification>>,
    max_size: usize,
    next_id: AtomicU64,
}

impl NotificationStore {
    /// 创建新的通知存储
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::with_capacity(max_size)),
            max_size,
            next_id: AtomicU64::new(1),
        }
    }

    /// 记录一条通知
    pub fn push(&self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let entry = Notification {
            id,
            timestamp: chrono::Utc::now().timestamp(),
            level,
            message: message.into(),
        };

        let mut entries = self.entries.write().unwrap();

        // 如果超过最大容量，移除最旧的
        if entries.len() >= self.max_size {
            entries.pop_front();
        }
        entries.push_back(entry);

        id
    }

    /// 获取通知 (从新到旧)
    pub fn list(&self, limit: usize, offset: usize) -> Vec<Notification> {
        let entries = self.entries.read().unwrap();
        entries.iter().rev().skip(offset).take(limit).cloned().collect()
    }

    /// 通知总数
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 清空通知
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_list_newest_first() {
        let store = NotificationStore::new(10);
        store.push(NotificationLevel::Info, "first");
        store.push(NotificationLevel::Success, "second");

        let listed = store.list(10, 0);
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].message, "second");
        assert_eq!(listed[1].message, "first");
        assert!(listed[0].id > listed[1].id);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let store = NotificationStore::new(3);
        for i in 0..5 {
            store.push(NotificationLevel::Info, format!("msg-{}", i));
        }

        assert_eq!(store.len(), 3);
        let listed = store.list(10, 0);
        assert_eq!(listed[0].message, "msg-4");
        assert_eq!(listed[2].message, "msg-2");
    }

    #[test]
    fn test_clear() {
        let store = NotificationStore::default();
        store.push(NotificationLevel::Error, "boom");
        assert!(!store.is_empty());

        store.clear();
        assert!(store.is_empty());
        assert!(store.list(10, 0).is_empty());
    }
}
