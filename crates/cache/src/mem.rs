use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use geumgo_core::cache::error::CacheError;
use geumgo_core::cache::port::Cache;

/// # Summary
/// 基于 DashMap 的带时间戳内存缓存实现。
///
/// # Invariants
/// - 所有操作均通过并发哈希表 `DashMap` 执行，保证多线程安全。
/// - 不做自动过期清理：过期条目留在表中，等待下一次同键写入覆盖；
///   新鲜度判定完全由读取方完成。
pub struct MemCache {
    // 线程安全的 KV 存储容器，值为 (字节, 写入时刻)
    storage: DashMap<String, (Vec<u8>, DateTime<Utc>)>,
}

impl MemCache {
    /// # Summary
    /// 创建一个新的 MemCache 实例。
    ///
    /// # Logic
    /// 初始化底层的 DashMap 存储引擎。
    ///
    /// # Returns
    /// * `Self` - 初始化的缓存实例。
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }
}

impl Default for MemCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for MemCache {
    /// # Summary
    /// 写入原始字节并记录写入时刻。
    ///
    /// # Logic
    /// 将 Key 转换为 String 后与 (Value, 时间戳) 一并插入哈希表。
    /// 同名 Key 的旧条目（无论是否过期）被原子覆盖。
    ///
    /// # Arguments
    /// * `key`: 唯一索引。
    /// * `value`: 待存入的字节序列。
    /// * `stored_at`: 写入时刻。
    ///
    /// # Returns
    /// * `Result<(), CacheError>` - 始终返回 Ok，除非内存分配失败。
    async fn put_raw(
        &self,
        key: &str,
        value: Vec<u8>,
        stored_at: DateTime<Utc>,
    ) -> Result<(), CacheError> {
        self.storage.insert(key.to_string(), (value, stored_at));
        Ok(())
    }

    /// # Summary
    /// 获取原始字节及其写入时刻。
    ///
    /// # Logic
    /// 从哈希表中检索 Key 对应的引用，并将其克隆为独立的所有权对象返回。
    ///
    /// # Arguments
    /// * `key`: 唯一索引。
    ///
    /// # Returns
    /// * 存在则返回克隆的 (数据, 时间戳)，否则返回 None。
    async fn get_raw(&self, key: &str) -> Result<Option<(Vec<u8>, DateTime<Utc>)>, CacheError> {
        Ok(self.storage.get(key).map(|v| v.value().clone()))
    }

    /// # Summary
    /// 删除指定键。
    ///
    /// # Logic
    /// 从哈希表中执行原子移除操作。
    ///
    /// # Arguments
    /// * `key`: 待删除的唯一索引。
    ///
    /// # Returns
    /// * `Result<(), CacheError>` - 无论键是否存在均返回 Ok。
    async fn del(&self, key: &str) -> Result<(), CacheError> {
        self.storage.remove(key);
        Ok(())
    }
}
