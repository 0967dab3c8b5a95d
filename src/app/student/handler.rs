//! 学生请求处理器
//!
//! 新增、编辑、删除之后直接重新渲染列表页，不做重定向。

use askama::Template;
use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::Html,
    routing::get,
    Form, Router,
};
use tracing::{debug, info};

use super::{
    model::StudentForm,
    service::StudentService,
    view::{EditTemplate, IndexTemplate},
};
use crate::core::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(create_student))
        .route("/delete/:student_id", get(delete_student))
        .route("/edit/:student_id", get(edit_student).post(update_student))
}

async fn render_list(state: &AppState) -> Result<Html<String>, AppError> {
    let students = state.students.list_all().await?;
    debug!("渲染学生列表: {} 条记录", students.len());
    Ok(Html(IndexTemplate::new(&students).render()?))
}

pub async fn list_students(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_list(&state).await
}

pub async fn create_student(
    State(state): State<AppState>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Form(form) = form?;
    let id = state.students.insert(&form).await?;
    info!("新增学生: {} ({})", form.full_name, id);
    render_list(&state).await
}

pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = id?;
    let affected = state.students.delete(id).await?;
    info!("删除学生: {} (影响 {} 行)", id, affected);
    render_list(&state).await
}

pub async fn edit_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = id?;
    let student = state.students.get(id).await?;
    Ok(Html(EditTemplate::new(id, student.as_ref()).render()?))
}

pub async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<StudentForm>, FormRejection>,
) -> Result<Html<String>, AppError> {
    let Path(id) = id?;
    let Form(form) = form?;
    let affected = state.students.update(id, &form).await?;
    info!("更新学生: {} (影响 {} 行)", id, affected);
    render_list(&state).await
}
