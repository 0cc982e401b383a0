use async_trait::async_trait;
use chrono::Utc;
use geumgo_core::holdings::entity::Holdings;
use geumgo_core::store::error::StoreError;
use geumgo_core::store::port::HoldingsStore;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::fs;
use tracing::info;

/// 默认持仓数据库文件名
const DEFAULT_HOLDINGS_DB: &str = "holdings.db";

/// # Summary
/// `HoldingsStore` 的 SQLite 实现。
///
/// 仪表盘是单用户应用，持仓表用 `CHECK (id = 1)` 约束成单行：
/// 保存即 UPSERT 该行，清除即删除该行。
///
/// # Invariants
/// - 数据库结构在存储实例创建时初始化。
/// - 所有操作均通过共享的 `SqlitePool` 执行。
/// - 非法持仓（非正的克数或均价）在落库前被拒绝。
pub struct SqliteHoldingsStore {
    pool: SqlitePool,
}

impl SqliteHoldingsStore {
    /// 创建新的 SqliteHoldingsStore 并初始化表结构。
    ///
    /// # Logic
    /// 1. 获取配置的数据根目录并确保其存在。
    /// 2. 配置 SQLite 连接选项，开启 `create_if_missing`。
    /// 3. 连接到数据库并执行 DDL 初始化持仓表。
    ///
    /// # Returns
    /// * `Result<Self, StoreError>` - 存储实例 or 数据库错误。
    pub async fn new() -> Result<Self, StoreError> {
        let root = crate::config::get_root_dir();
        fs::create_dir_all(&root).map_err(|e| StoreError::Database(e.to_string()))?;

        let db_path = root.join(DEFAULT_HOLDINGS_DB);

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS holdings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                amount REAL NOT NULL,
                avg_price REAL NOT NULL,
                updated_at DATETIME NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        info!("holdings store ready at {}", db_path.display());

        Ok(Self { pool })
    }
}

#[async_trait]
impl HoldingsStore for SqliteHoldingsStore {
    /// # Summary
    /// 保存（覆盖）持仓记录。
    ///
    /// # Logic
    /// 1. 调用 `Holdings::validate` 校验，失败映射为 `InvalidHoldings`。
    /// 2. 以 `INSERT OR REPLACE` 覆盖写唯一行并刷新时间戳。
    ///
    /// # Arguments
    /// * `holdings`: 待保存的持仓。
    ///
    /// # Returns
    /// 操作结果。
    async fn save(&self, holdings: &Holdings) -> Result<(), StoreError> {
        holdings.validate().map_err(StoreError::InvalidHoldings)?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO holdings (id, amount, avg_price, updated_at)
            VALUES (1, ?, ?, ?)
            "#,
        )
        .bind(holdings.amount)
        .bind(holdings.avg_price)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    /// # Summary
    /// 读取持仓记录。
    ///
    /// # Logic
    /// 查询唯一行，不存在即返回 None。
    ///
    /// # Returns
    /// 持仓选项。
    async fn load(&self) -> Result<Option<Holdings>, StoreError> {
        let row: Option<(f64, f64)> =
            sqlx::query_as("SELECT amount, avg_price FROM holdings WHERE id = 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(row.map(|(amount, avg_price)| Holdings { amount, avg_price }))
    }

    /// # Summary
    /// 清除持仓记录。
    ///
    /// # Logic
    /// 删除唯一行，行不存在也视为成功。
    ///
    /// # Returns
    /// 操作结果。
    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM holdings WHERE id = 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }
}
