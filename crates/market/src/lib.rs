//! # `geumgo-market` - 市场快照服务
//!
//! 组合报价数据源与内存缓存，对外提供不可失败的实时快照：
//! 缓存命中直接返回，未命中并发抓取两腿报价，
//! 单腿故障降级到基准兜底常量。

pub mod snapshot;
