// ==========================================
// 商品カタログ管理 - 商品仓储
// ==========================================
// 职责: 管理 products 表的检索 / CRUD / 批量保存
// 红线: 不含业务逻辑，只负责数据访问
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::product::Product;
use crate::domain::search::ProductSearchRequest;
use crate::domain::types::ProductStatus;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::query::{ProductFilter, SortSpec};
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

/// SELECT 列清单（与 map_row 的列序一致）
const PRODUCT_COLUMNS: &str = "id, product_code, product_name, category, price, \
     stock_quantity, status, description, created_at, updated_at";

// ==========================================
// ProductRepository - 商品仓储
// ==========================================
pub struct ProductRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ProductRepository {
    /// 创建新的 ProductRepository 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
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

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // 检索
    // ==========================================

    /// 分页检索商品
    ///
    /// # 参数
    /// - req: 检索条件（过滤 + 分页）
    /// - sort: 排序指示（已解析）
    ///
    /// # 返回
    /// - Ok((Vec<Product>, i64)): 当前页数据 + 满足条件的总件数
    pub fn search(
        &self,
        req: &ProductSearchRequest,
        sort: &SortSpec,
    ) -> RepositoryResult<(Vec<Product>, i64)> {
        let filter = ProductFilter::from_request(req);
        let conn = self.get_conn()?;

        let count_sql = format!("SELECT COUNT(*) FROM products{}", filter.where_sql());
        let total: i64 = conn.query_row(
            &count_sql,
            params_from_iter(filter.params().iter()),
            |row| row.get(0),
        )?;

        let current = i64::from(req.current.max(1));
        let page_size = i64::from(req.page_size.max(1));
        let offset = (current - 1) * page_size;

        let select_sql = format!(
            "SELECT {} FROM products{}{} LIMIT ? OFFSET ?",
            PRODUCT_COLUMNS,
            filter.where_sql(),
            sort.order_by_sql()
        );
        let mut stmt = conn.prepare(&select_sql)?;

        let mut query_params: Vec<Value> = filter.params().to_vec();
        query_params.push(Value::Integer(page_size));
        query_params.push(Value::Integer(offset));

        let products = stmt
            .query_map(params_from_iter(query_params.iter()), Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok((products, total))
    }

    /// 导出用全量检索（固定按 id 升序,不分页）
    pub fn find_for_export(&self, req: &ProductSearchRequest) -> RepositoryResult<Vec<Product>> {
        let filter = ProductFilter::from_request(req);
        let conn = self.get_conn()?;

        let select_sql = format!(
            "SELECT {} FROM products{} ORDER BY id ASC",
            PRODUCT_COLUMNS,
            filter.where_sql()
        );
        let mut stmt = conn.prepare(&select_sql)?;
        let products = stmt
            .query_map(params_from_iter(filter.params().iter()), Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    /// 按系统主键查询
    pub fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let sql = format!("SELECT {} FROM products WHERE id = ?1", PRODUCT_COLUMNS);
        let result = conn
            .query_row(&sql, params![id], Self::map_row)
            .optional()?;
        Ok(result)
    }

    /// 按业务键（商品编码）查询
    pub fn find_by_code(&self, product_code: &str) -> RepositoryResult<Option<Product>> {
        let conn = self.get_conn()?;
        let sql = format!(
            "SELECT {} FROM products WHERE product_code = ?1",
            PRODUCT_COLUMNS
        );
        let result = conn
            .query_row(&sql, params![product_code], Self::map_row)
            .optional()?;
        Ok(result)
    }

    // ==========================================
    // 单条维护
    // ==========================================

    /// 插入商品，返回带 id 的实体
    pub fn insert(&self, mut product: Product) -> RepositoryResult<Product> {
        let now = Utc::now();
        product.created_at = now;
        product.updated_at = now;

        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO products (
                product_code, product_name, category, price,
                stock_quantity, status, description, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
            params![
                product.product_code,
                product.product_name,
                product.category,
                price_to_db(&product.price),
                product.stock_quantity,
                product.status.as_str(),
                product.description,
                product.created_at.to_rfc3339(),
                product.updated_at.to_rfc3339(),
            ],
        )?;
        product.id = Some(conn.last_insert_rowid());
        Ok(product)
    }

    /// 按 id 覆写商品（全字段,包括商品编码）
    pub fn update(&self, product: &Product) -> RepositoryResult<()> {
        let id = product.id.ok_or_else(|| {
            RepositoryError::InternalError("更新対象の商品に id がありません".to_string())
        })?;

        let conn = self.get_conn()?;
        let affected = Self::execute_update(&conn, id, product, Utc::now())?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// 按 id 删除商品
    pub fn delete(&self, id: i64) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Product".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    // ==========================================
    // 批量保存（导入用）
    // ==========================================

    /// 批量保存：id 为 None 的记录插入，其余按 id 覆写
    ///
    /// # 返回
    /// - Ok(usize): 保存的记录数
    ///
    /// # 说明
    /// - 整批在单个事务内完成；任一条失败则整批回滚
    pub fn save_all(&self, products: Vec<Product>) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;
        let now = Utc::now();

        let mut count = 0;
        for product in &products {
            match product.id {
                Some(id) => {
                    Self::execute_update(&tx, id, product, now)?;
                }
                None => {
                    tx.execute(
                        r#"
                        INSERT INTO products (
                            product_code, product_name, category, price,
                            stock_quantity, status, description, created_at, updated_at
                        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                        "#,
                        params![
                            product.product_code,
                            product.product_name,
                            product.category,
                            price_to_db(&product.price),
                            product.stock_quantity,
                            product.status.as_str(),
                            product.description,
                            now.to_rfc3339(),
                            now.to_rfc3339(),
                        ],
                    )?;
                }
            }
            count += 1;
        }

        tx.commit()?;
        Ok(count)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn execute_update(
        conn: &Connection,
        id: i64,
        product: &Product,
        now: DateTime<Utc>,
    ) -> RepositoryResult<usize> {
        let affected = conn.execute(
            r#"
            UPDATE products SET
                product_code = ?1, product_name = ?2, category = ?3, price = ?4,
                stock_quantity = ?5, status = ?6, description = ?7, updated_at = ?8
            WHERE id = ?9
            "#,
            params![
                product.product_code,
                product.product_name,
                product.category,
                price_to_db(&product.price),
                product.stock_quantity,
                product.status.as_str(),
                product.description,
                now.to_rfc3339(),
                id,
            ],
        )?;
        Ok(affected)
    }

    /// 行 → 实体映射（列序与 PRODUCT_COLUMNS 一致）
    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
        let price_raw: f64 = row.get(4)?;
        let status_raw: String = row.get(6)?;
        let created_raw: String = row.get(8)?;
        let updated_raw: String = row.get(9)?;

        Ok(Product {
            id: row.get(0)?,
            product_code: row.get(1)?,
            product_name: row.get(2)?,
            category: row.get(3)?,
            price: Decimal::from_f64(price_raw)
                .ok_or_else(|| conversion_error(4, format!("不正な単価: {}", price_raw)))?,
            stock_quantity: row.get(5)?,
            status: ProductStatus::parse(&status_raw)
                .ok_or_else(|| conversion_error(6, format!("不正なステータス: {}", status_raw)))?,
            description: row.get(7)?,
            created_at: parse_timestamp(8, &created_raw)?,
            updated_at: parse_timestamp(9, &updated_raw)?,
        })
    }
}

/// 单价 → REAL 列值
fn price_to_db(price: &Decimal) -> f64 {
    price.to_f64().unwrap_or(0.0)
}

fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, format!("不正な日時: {} ({})", raw, e)))
}

fn conversion_error(idx: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, message.into())
}
