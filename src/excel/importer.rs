// ==========================================
// 商品カタログ管理 - 商品导入编排
// ==========================================
// 职责: 整合导入流程,从工作表到数据库
// 流程: 取表 → 逐行解码 → 校验 → Upsert 判定 → 批量落库
// 口径: 行级错误聚合上报,不中断整批;
//       文件不可读等致命错误使整次调用失败
// ==========================================

use crate::domain::import::{ImportResult, RawProductRow};
use crate::domain::product::Product;
use crate::domain::types::ProductStatus;
use crate::excel::cell;
use crate::excel::error::{ExcelError, ExcelResult};
use crate::excel::validator::RowValidator;
use crate::repository::{CategoryRepository, ProductRepository};
use calamine::{open_workbook, Reader, Xlsx};
use rust_decimal::Decimal;
use std::io::{Read, Seek};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// Upsert 判定结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertKind {
    Insert,
    Update,
}

/// 校验通过后的一行（各字段已类型化、必填字段必定存在）
struct ValidatedRow {
    product_code: String,
    product_name: String,
    category: String,
    price: Decimal,
    stock_quantity: i32,
    status: ProductStatus,
    description: Option<String>,
}

impl ValidatedRow {
    fn from_raw(raw: RawProductRow) -> Option<Self> {
        Some(Self {
            product_code: raw.product_code?,
            product_name: raw.product_name?,
            category: raw.category?,
            price: raw.price?,
            stock_quantity: raw.stock_quantity?,
            status: raw.status.as_deref().and_then(ProductStatus::parse)?,
            // 空白描述归一化为 None
            description: raw.description.filter(|s| !s.is_empty()),
        })
    }
}

// ==========================================
// ProductImporter - 商品导入编排器
// ==========================================
pub struct ProductImporter {
    product_repo: Arc<ProductRepository>,
    category_repo: Arc<CategoryRepository>,
}

impl ProductImporter {
    pub fn new(
        product_repo: Arc<ProductRepository>,
        category_repo: Arc<CategoryRepository>,
    ) -> Self {
        Self {
            product_repo,
            category_repo,
        }
    }

    /// 从文件路径导入
    ///
    /// # 返回
    /// - Ok(ImportResult): 导入汇总（行级错误含在其中,success 恒为 true）
    /// - Err(ExcelError): 文件不存在/不可读等致命错误
    #[instrument(skip(self, file_path))]
    pub fn import_path<P: AsRef<Path>>(&self, file_path: P) -> ExcelResult<ImportResult> {
        let path = file_path.as_ref();
        if !path.exists() {
            return Err(ExcelError::FileNotFound(path.display().to_string()));
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" {
            return Err(ExcelError::UnsupportedFormat(ext));
        }

        let workbook: Xlsx<_> = open_workbook(path)
            .map_err(|e: calamine::XlsxError| ExcelError::ExcelParseError(e.to_string()))?;
        self.import_workbook(workbook)
    }

    /// 从字节流导入（上传文件场景）
    pub fn import_reader<R: Read + Seek>(&self, reader: R) -> ExcelResult<ImportResult> {
        let workbook =
            Xlsx::new(reader).map_err(|e| ExcelError::ExcelParseError(e.to_string()))?;
        self.import_workbook(workbook)
    }

    fn import_workbook<R: Read + Seek>(&self, mut workbook: Xlsx<R>) -> ExcelResult<ImportResult> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        info!(batch_id = %batch_id, "开始导入商品数据");

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ExcelError::ExcelParseError("Excel 文件无工作表".to_string()));
        }
        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ExcelError::ExcelParseError(e.to_string()))?;

        // 分类集合:每次导入只加载一次
        let validator = RowValidator::new(self.category_repo.category_name_set()?);

        let mut errors = Vec::new();
        let mut to_save = Vec::new();
        let mut total_rows = 0usize;
        let mut inserted_count = 0usize;
        let mut updated_count = 0usize;

        for (idx, row) in range.rows().enumerate() {
            // 第 0 行为表头
            if idx == 0 {
                continue;
            }
            // 整行空白:跳过,不计入行数
            if cell::is_blank_row(row) {
                continue;
            }

            total_rows += 1;
            // 表内可见行号（表头为第 1 行）
            let raw = cell::decode_product_row(row, idx + 1);

            let row_errors = validator.validate(&raw);
            if !row_errors.is_empty() {
                errors.extend(row_errors);
                continue;
            }

            let Some(validated) = ValidatedRow::from_raw(raw) else {
                // 校验通过的行必定能完成类型化
                return Err(ExcelError::InternalError(format!(
                    "校验通过的行类型化失败 (行 {})",
                    idx + 1
                )));
            };

            let (product, kind) = self.resolve_upsert(validated)?;
            match kind {
                UpsertKind::Insert => inserted_count += 1,
                UpsertKind::Update => updated_count += 1,
            }
            to_save.push(product);
        }

        // 批量落库:整批单事务,任一失败整批回滚
        if !to_save.is_empty() {
            let saved = self.product_repo.save_all(to_save)?;
            debug!(batch_id = %batch_id, saved = saved, "批量保存完成");
        }

        info!(
            batch_id = %batch_id,
            total_rows = total_rows,
            inserted = inserted_count,
            updated = updated_count,
            error_count = errors.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "商品导入完成"
        );

        Ok(ImportResult {
            success: true,
            total_rows,
            inserted_count,
            updated_count,
            error_count: errors.len(),
            errors,
        })
    }

    /// Upsert 判定：业务键命中则覆写可变字段,否则新建
    ///
    /// 命中时 id 与商品编码保持不变（编码即匹配键）
    fn resolve_upsert(&self, row: ValidatedRow) -> ExcelResult<(Product, UpsertKind)> {
        match self.product_repo.find_by_code(&row.product_code)? {
            Some(mut existing) => {
                existing.product_name = row.product_name;
                existing.category = row.category;
                existing.price = row.price;
                existing.stock_quantity = row.stock_quantity;
                existing.status = row.status;
                existing.description = row.description;
                Ok((existing, UpsertKind::Update))
            }
            None => {
                let product = Product::new(
                    row.product_code,
                    row.product_name,
                    row.category,
                    row.price,
                    row.stock_quantity,
                    row.status,
                    row.description,
                );
                Ok((product, UpsertKind::Insert))
            }
        }
    }
}
