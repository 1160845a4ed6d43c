// ==========================================
// 商品カタログ管理 - 分类仓储
// ==========================================
// 职责: 管理 categories 表；导入管线视角下只读
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::category::Category;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub struct CategoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CategoryRepository {
    /// 创建新的 CategoryRepository 实例
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 全量查询（按展示顺序）
    pub fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, category_code, category_name, sort_order \
             FROM categories ORDER BY sort_order, id",
        )?;
        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    category_code: row.get(1)?,
                    category_name: row.get(2)?,
                    sort_order: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// 有效分类名集合（导入校验用,每次导入只加载一次）
    pub fn category_name_set(&self) -> RepositoryResult<HashSet<String>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT category_name FROM categories")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(names)
    }

    /// 插入分类（初始数据投入・测试用）
    pub fn insert(&self, category: &Category) -> RepositoryResult<i64> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO categories (category_code, category_name, sort_order) \
             VALUES (?1, ?2, ?3)",
            params![
                category.category_code,
                category.category_name,
                category.sort_order
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_repo() -> CategoryRepository {
        let conn = Connection::open_in_memory().unwrap();
        db::configure_sqlite_connection(&conn).unwrap();
        db::init_schema(&conn).unwrap();
        CategoryRepository::from_connection(Arc::new(Mutex::new(conn)))
    }

    fn category(code: &str, name: &str, sort_order: i32) -> Category {
        Category {
            id: None,
            category_code: code.to_string(),
            category_name: name.to_string(),
            sort_order,
        }
    }

    #[test]
    fn test_find_all_ordered_by_sort_order() {
        let repo = test_repo();
        repo.insert(&category("C2", "書籍", 2)).unwrap();
        repo.insert(&category("C1", "家電", 1)).unwrap();

        let all = repo.find_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category_name, "家電");
        assert_eq!(all[1].category_name, "書籍");
    }

    #[test]
    fn test_category_name_set() {
        let repo = test_repo();
        repo.insert(&category("C1", "家電", 1)).unwrap();
        repo.insert(&category("C2", "書籍", 2)).unwrap();

        let names = repo.category_name_set().unwrap();
        assert!(names.contains("家電"));
        assert!(names.contains("書籍"));
        assert!(!names.contains("食品"));
    }

    #[test]
    fn test_insert_duplicate_code_violates_unique() {
        let repo = test_repo();
        repo.insert(&category("C1", "家電", 1)).unwrap();
        let result = repo.insert(&category("C1", "別名", 2));
        assert!(matches!(
            result,
            Err(RepositoryError::UniqueConstraintViolation(_))
        ));
    }
}
