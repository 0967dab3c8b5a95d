//! 学生数据模型

use serde::Deserialize;

/// `students` 表中的一条记录
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub full_name: String,
    pub birth_year: i64,
    pub birth_place: String,
    pub age: i64,
    pub gender: String,
    pub course: i64,
    pub department: String,
}

/// 新增与编辑共用的表单，七个字段均为必填
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentForm {
    pub full_name: String,
    pub birth_year: i64,
    pub birth_place: String,
    pub age: i64,
    pub gender: String,
    pub course: i64,
    pub department: String,
}
