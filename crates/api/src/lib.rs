//! # `geumgo-api` - HTTP API 网关
//!
//! 本 crate 是金价仪表盘后端的 HTTP/REST 服务入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 接收来自浏览器仪表盘的 HTTP 请求
//! - 把请求参数钳制/回退成合法值后调用合成器与分析引擎
//! - 调用下层 `SnapshotSource` 与 `HoldingsStore` 完成业务操作
//! - 将领域模型转换为 DTO 返回给前端

pub mod error;
pub mod routes;
pub mod server;
pub mod types;
