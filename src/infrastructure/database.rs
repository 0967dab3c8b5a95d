//! 数据库基础设施

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Error,
};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

const CREATE_STUDENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    birth_year INTEGER NOT NULL,
    birth_place TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL,
    course INTEGER NOT NULL,
    department TEXT NOT NULL
)
"#;

pub struct DatabaseManager {
    pool: SqlitePool,
}

impl DatabaseManager {
    /// 打开连接池并确保表结构存在
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(8))
            .connect_with(options)
            .await?;

        let manager = Self { pool };
        manager.create_tables().await?;

        info!("数据库已连接: {}", config.url);
        Ok(manager)
    }

    async fn create_tables(&self) -> Result<(), Error> {
        sqlx::query(CREATE_STUDENTS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// 关闭连接池，等待所有连接归还
    pub async fn close(&self) {
        self.pool.close().await;
        info!("数据库连接池已关闭");
    }
}
