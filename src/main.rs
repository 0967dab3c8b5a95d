use student_registry::{
    build_app,
    config::load_config,
    infrastructure::{database::DatabaseManager, logger::Logger},
};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    info!("启动学生信息管理服务...");

    let db = DatabaseManager::connect(&config.database).await.map_err(|e| {
        error!("数据库初始化失败: {}", e);
        e
    })?;

    let app = build_app(db.get_pool().clone());

    let listener = TcpListener::bind(config.socket_addr()?).await?;
    let addr = listener.local_addr()?;

    info!("🚀 服务运行在 http://{}", addr);
    info!("   GET    /                  - 学生列表");
    info!("   POST   /                  - 新增学生");
    info!("   GET    /edit/:student_id   - 编辑页面");
    info!("   POST   /edit/:student_id   - 提交编辑");
    info!("   GET    /delete/:student_id - 删除学生");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db.close().await;
    served?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("无法监听退出信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭...");
}
