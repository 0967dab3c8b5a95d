//! 页面渲染

use askama::Template;

use super::model::Student;

/// 表单字段的显示值；新增表单与不存在的记录都使用空值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFields {
    pub full_name: String,
    pub birth_year: String,
    pub birth_place: String,
    pub age: String,
    pub gender: String,
    pub course: String,
    pub department: String,
}

impl From<&Student> for StudentFields {
    fn from(student: &Student) -> Self {
        Self {
            full_name: student.full_name.clone(),
            birth_year: student.birth_year.to_string(),
            birth_place: student.birth_place.clone(),
            age: student.age.to_string(),
            gender: student.gender.clone(),
            course: student.course.to_string(),
            department: student.department.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub students: &'a [Student],
    pub fields: StudentFields,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(students: &'a [Student]) -> Self {
        Self {
            students,
            fields: StudentFields::default(),
        }
    }
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub id: i64,
    pub found: bool,
    pub fields: StudentFields,
}

impl EditTemplate {
    pub fn new(id: i64, student: Option<&Student>) -> Self {
        Self {
            id,
            found: student.is_some(),
            fields: student.map(StudentFields::from).unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub code: u16,
    pub reason: &'static str,
    pub message: String,
    pub timestamp: String,
}
