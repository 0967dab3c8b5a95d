//! # 学生信息管理
//!
//! 基于 Axum + SQLx (SQLite) + Askama 的服务端渲染 CRUD 应用：
//! - `app`: 学生记录的模型、存储、处理器与页面
//! - `core`: 错误处理与中间件
//! - `infrastructure`: 数据库连接池与日志
//! - `config`: 配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use app::student::{handler::AppState, service::StudentService};
use sqlx::sqlite::SqlitePool;

/// 构建完整的应用路由
pub fn build_app(pool: SqlitePool) -> Router {
    let state = AppState {
        students: StudentService::new(pool),
    };

    app::student::handler::routes()
        .layer(middleware::from_fn(crate::core::middleware::request_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
