use crate::cache::error::CacheError;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// # Summary
/// 带时间戳的异步 KV 缓存端口。
///
/// 每个条目在写入时打上时间戳，读取方据此自行判定新鲜度。
/// 过期条目不会被主动清理，由下一次同键写入原地覆盖
/// （time-stamped overwrite）。
///
/// # Invariants
/// - 处理原始字节，保证 Trait 是对象安全的 (Object Safe)。
/// - 写入即覆盖，无条件成功；不提供容量上限。
#[async_trait]
pub trait Cache: Send + Sync {
    /// # Summary
    /// 写入原始字节并记录写入时刻。
    ///
    /// # Logic
    /// 1. 以原子方式覆盖同键旧条目及其时间戳。
    ///
    /// # Arguments
    /// * `key`: 唯一键。
    /// * `value`: 原始字节数组。
    /// * `stored_at`: 条目的写入时刻（由调用方的时钟供给）。
    ///
    /// # Returns
    /// 成功返回 Ok，失败返回 `CacheError`。
    async fn put_raw(
        &self,
        key: &str,
        value: Vec<u8>,
        stored_at: DateTime<Utc>,
    ) -> Result<(), CacheError>;

    /// # Summary
    /// 获取原始字节及其写入时刻。
    ///
    /// # Logic
    /// 1. 根据键检索条目，一并返回写入时间戳。
    ///
    /// # Arguments
    /// * `key`: 唯一键。
    ///
    /// # Returns
    /// 存在则返回 `Some((字节, 写入时刻))`，否则返回 None。
    async fn get_raw(&self, key: &str) -> Result<Option<(Vec<u8>, DateTime<Utc>)>, CacheError>;

    /// # Summary
    /// 删除指定键。
    ///
    /// # Logic
    /// 1. 移除键值对并释放空间。
    ///
    /// # Arguments
    /// * `key`: 唯一键。
    ///
    /// # Returns
    /// 无论键是否存在均返回 Ok。
    async fn del(&self, key: &str) -> Result<(), CacheError>;
}

/// # Summary
/// 缓存泛型扩展接口，提供序列化与新鲜度判定的便捷封装。
///
/// # Invariants
/// - 自动为所有实现 `Cache` 的类型提供支持。
#[async_trait]
pub trait CacheExt: Cache {
    /// # Summary
    /// 存入强类型对象并打时间戳。
    ///
    /// # Logic
    /// 1. 使用 JSON 序列化对象。
    /// 2. 调用底层 `put_raw` 写入。
    ///
    /// # Arguments
    /// * `key`: 唯一键。
    /// * `value`: 实现了 Serialize 的对象引用。
    /// * `stored_at`: 写入时刻。
    ///
    /// # Returns
    /// 操作结果。
    async fn put<T: Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        stored_at: DateTime<Utc>,
    ) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value).map_err(|e| CacheError::Serialize(e.to_string()))?;
        self.put_raw(key, bytes, stored_at).await
    }

    /// # Summary
    /// 取出仍在有效期内的强类型对象。
    ///
    /// # Logic
    /// 1. 调用底层 `get_raw` 获取字节与写入时刻。
    /// 2. 若 `now - stored_at` 超过 `max_age`，视为过期返回 None。
    /// 3. 否则反序列化为目标类型。
    ///
    /// # Arguments
    /// * `key`: 唯一键。
    /// * `now`: 当前时刻（由调用方的时钟供给）。
    /// * `max_age`: 条目的最大存活时长。
    ///
    /// # Returns
    /// 新鲜条目反序列化后的对象，过期或缺失返回 None。
    async fn get_fresh<T: DeserializeOwned + Send>(
        &self,
        key: &str,
        now: DateTime<Utc>,
        max_age: Duration,
    ) -> Result<Option<T>, CacheError> {
        match self.get_raw(key).await? {
            Some((bytes, stored_at)) => {
                if now - stored_at > max_age {
                    return Ok(None);
                }
                let val = serde_json::from_slice(&bytes)
                    .map_err(|e| CacheError::Deserialize(e.to_string()))?;
                Ok(Some(val))
            }
            None => Ok(None),
        }
    }
}

impl<T: Cache + ?Sized> CacheExt for T {}
