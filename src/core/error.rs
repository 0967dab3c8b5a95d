//! 核心错误处理模块

use askama::Template;
use axum::{
    extract::rejection::{FormRejection, PathRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::{error, warn};

use crate::app::student::view::ErrorTemplate;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 表单字段缺失或类型不符
    #[error("表单数据无效: {0}")]
    InvalidForm(#[from] FormRejection),
    /// 路径参数不是整数
    #[error("路径参数无效: {0}")]
    InvalidPath(#[from] PathRejection),
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("页面渲染失败: {0}")]
    Render(#[from] askama::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidForm(
                FormRejection::FailedToDeserializeForm(_)
                | FormRejection::FailedToDeserializeFormBody(_),
            ) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidForm(rejection) => rejection.status(),
            AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回给用户的信息；服务端错误不暴露内部细节
    fn user_message(&self) -> String {
        match self {
            AppError::InvalidForm(rejection) => rejection.body_text(),
            AppError::InvalidPath(rejection) => rejection.body_text(),
            AppError::Database(_) => "数据库不可用".to_string(),
            AppError::Render(_) => "页面渲染失败".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            warn!("{}", self);
        }

        let page = ErrorTemplate {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or(""),
            message: self.user_message(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(_) => status.into_response(),
        }
    }
}
