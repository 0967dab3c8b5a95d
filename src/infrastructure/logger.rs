//! 日志基础设施

use tracing_subscriber::{fmt, EnvFilter};

pub struct Logger;

impl Logger {
    /// 初始化日志；`RUST_LOG` 优先于配置中的级别
    pub fn init(level: &str) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{},tower_http=info", level)));

        fmt().with_env_filter(filter).with_target(false).compact().init();
    }
}
