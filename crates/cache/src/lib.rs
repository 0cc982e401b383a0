//! # `geumgo-cache` - 内存缓存实现
//!
//! 基于 `DashMap` 的带时间戳 KV 缓存，为实时快照提供
//! time-boxed 覆盖写语义的存储介质。

pub mod mem;
