//! 学生记录存储

use sqlx::sqlite::SqlitePool;

use super::model::{Student, StudentForm};

const SELECT_ALL: &str = "SELECT id, full_name, birth_year, birth_place, age, gender, course, department \
     FROM students ORDER BY id";

const SELECT_BY_ID: &str = "SELECT id, full_name, birth_year, birth_place, age, gender, course, department \
     FROM students WHERE id = ?";

/// 学生记录的唯一持有者；每个方法都是一次独立的 SQL 语句
#[derive(Clone)]
pub struct StudentService {
    pool: SqlitePool,
}

impl StudentService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 按插入顺序返回全部记录
    pub async fn list_all(&self) -> Result<Vec<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Student>, sqlx::Error> {
        sqlx::query_as::<_, Student>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// 插入新记录，返回分配的 id
    pub async fn insert(&self, form: &StudentForm) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO students (full_name, birth_year, birth_place, age, gender, course, department) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&form.full_name)
        .bind(form.birth_year)
        .bind(&form.birth_place)
        .bind(form.age)
        .bind(&form.gender)
        .bind(form.course)
        .bind(&form.department)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// 覆盖全部字段；id 不存在时影响行数为 0，不视为错误
    pub async fn update(&self, id: i64, form: &StudentForm) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET full_name = ?, birth_year = ?, birth_place = ?, age = ?, \
             gender = ?, course = ?, department = ? WHERE id = ?",
        )
        .bind(&form.full_name)
        .bind(form.birth_year)
        .bind(&form.birth_place)
        .bind(form.age)
        .bind(&form.gender)
        .bind(form.course)
        .bind(&form.department)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::infrastructure::database::DatabaseManager;
    use tempfile::TempDir;

    async fn create_test_service() -> (TempDir, StudentService) {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("test.db").display()),
            max_connections: 1,
        };
        let db = DatabaseManager::connect(&config).await.unwrap();
        (dir, StudentService::new(db.get_pool().clone()))
    }

    fn sample_form(name: &str) -> StudentForm {
        StudentForm {
            full_name: name.to_string(),
            birth_year: 2000,
            birth_place: "X".to_string(),
            age: 24,
            gender: "F".to_string(),
            course: 2,
            department: "CS".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_list() {
        let (_dir, service) = create_test_service().await;
        assert!(service.list_all().await.unwrap().is_empty());

        let id = service.insert(&sample_form("Ann")).await.unwrap();
        let students = service.list_all().await.unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(
            students[0],
            Student {
                id,
                full_name: "Ann".to_string(),
                birth_year: 2000,
                birth_place: "X".to_string(),
                age: 24,
                gender: "F".to_string(),
                course: 2,
                department: "CS".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let (_dir, service) = create_test_service().await;
        for name in ["A", "B", "C"] {
            service.insert(&sample_form(name)).await.unwrap();
        }

        let names: Vec<String> = service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.full_name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let (_dir, service) = create_test_service().await;
        assert!(service.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let (_dir, service) = create_test_service().await;
        let id = service.insert(&sample_form("Ann")).await.unwrap();

        let changed = StudentForm {
            full_name: "Bob".to_string(),
            birth_year: 1999,
            birth_place: "Y".to_string(),
            age: 25,
            gender: "M".to_string(),
            course: 3,
            department: "Math".to_string(),
        };
        assert_eq!(service.update(id, &changed).await.unwrap(), 1);

        let student = service.get(id).await.unwrap().unwrap();
        assert_eq!(student.full_name, "Bob");
        assert_eq!(student.birth_year, 1999);
        assert_eq!(student.birth_place, "Y");
        assert_eq!(student.age, 25);
        assert_eq!(student.gender, "M");
        assert_eq!(student.course, 3);
        assert_eq!(student.department, "Math");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_are_noops() {
        let (_dir, service) = create_test_service().await;
        service.insert(&sample_form("Ann")).await.unwrap();

        assert_eq!(service.update(999, &sample_form("Bob")).await.unwrap(), 0);
        assert_eq!(service.delete(999).await.unwrap(), 0);

        let students = service.list_all().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].full_name, "Ann");
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let (_dir, service) = create_test_service().await;
        let first = service.insert(&sample_form("A")).await.unwrap();
        let second = service.insert(&sample_form("B")).await.unwrap();
        assert!(second > first);

        service.delete(second).await.unwrap();
        let third = service.insert(&sample_form("C")).await.unwrap();
        assert!(third > second);
    }
}
