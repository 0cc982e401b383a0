use chrono::{DateTime, Duration, Utc};
use std::sync::RwLock;

/// # Summary
/// 时钟供给器接口，隔离物理系统时间。
/// 合成序列的时间锚点与快照缓存的过期判断必须通过此接口取"当前时刻"，
/// 使测试可以完全控制时间流逝。
pub trait TimeProvider: Send + Sync {
    /// 获取当前挂载的时间
    fn now(&self) -> DateTime<Utc>;
}

/// # Summary
/// 生产环境真实时钟，直接透传操作系统时间。
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// # Summary
/// 测试专用虚拟时钟，允许调用方主动拨动时间。
///
/// # Invariants
/// - 内部通过 `RwLock` 保证多线程下读写时间的安全。
pub struct FakeClockProvider {
    current_time: RwLock<DateTime<Utc>>,
}

impl FakeClockProvider {
    /// 使用指定的初始时间创建虚拟时钟
    pub fn new(initial_time: DateTime<Utc>) -> Self {
        Self {
            current_time: RwLock::new(initial_time),
        }
    }

    /// 将时钟强制设定到指定时刻
    pub fn set_time(&self, new_time: DateTime<Utc>) {
        let mut time = self.current_time.write().unwrap_or_else(|e| e.into_inner());
        *time = new_time;
    }

    /// 将时钟向前拨动指定时长
    pub fn advance(&self, delta: Duration) {
        let mut time = self.current_time.write().unwrap_or_else(|e| e.into_inner());
        *time += delta;
    }
}

impl TimeProvider for FakeClockProvider {
    fn now(&self) -> DateTime<Utc> {
        *self
            .current_time
            .read()
            .unwrap_or_else(|e| e.into_inner())
    }
}
