// ==========================================
// 商品カタログ管理 - 商品导出编排
// ==========================================
// 职责: 按检索条件导出商品一览工作表
// 口径: 固定按 id 升序;表头加粗;单价以数值输出;
//       行数据逐条写出,本层不累积任何中间表
// ==========================================

use crate::domain::search::ProductSearchRequest;
use crate::excel::error::{ExcelError, ExcelResult};
use crate::i18n;
use crate::repository::ProductRepository;
use chrono::{DateTime, Local};
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument};

/// 导出文件 MIME 类型
pub const EXCEL_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 列头键（列序与导入侧一致）
const HEADER_KEYS: [&str; 7] = [
    "field.product_code",
    "field.product_name",
    "field.category",
    "field.price",
    "field.stock_quantity",
    "field.status",
    "field.description",
];

// ==========================================
// ProductExporter - 商品导出编排器
// ==========================================
pub struct ProductExporter {
    product_repo: Arc<ProductRepository>,
}

impl ProductExporter {
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// 按检索条件导出,写入任意字节汇
    ///
    /// # 返回
    /// - Ok(usize): 导出的数据行数
    #[instrument(skip(self, out))]
    pub fn export<W: Write>(
        &self,
        req: &ProductSearchRequest,
        out: &mut W,
    ) -> ExcelResult<usize> {
        let start_time = Instant::now();
        let products = self.product_repo.find_for_export(req)?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(i18n::t("export.sheet_name"))?;

        // 表头行（加粗）
        let bold = Format::new().set_bold();
        for (col, key) in HEADER_KEYS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, i18n::t(key), &bold)?;
        }

        // 数据行
        for (i, product) in products.iter().enumerate() {
            let row = (i + 1) as u32;
            worksheet.write_string(row, 0, &product.product_code)?;
            worksheet.write_string(row, 1, &product.product_name)?;
            worksheet.write_string(row, 2, &product.category)?;
            worksheet.write_number(row, 3, product.price.to_f64().unwrap_or(0.0))?;
            worksheet.write_number(row, 4, f64::from(product.stock_quantity))?;
            worksheet.write_string(row, 5, product.status.as_str())?;
            worksheet.write_string(row, 6, product.description.as_deref().unwrap_or(""))?;
        }

        let buffer = workbook.save_to_buffer()?;
        out.write_all(&buffer)
            .map_err(|e| ExcelError::ExportWriteError(e.to_string()))?;

        info!(
            rows = products.len(),
            bytes = buffer.len(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "商品导出完成"
        );
        Ok(products.len())
    }

    /// 导出到缓冲区
    pub fn export_to_buffer(&self, req: &ProductSearchRequest) -> ExcelResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.export(req, &mut buffer)?;
        Ok(buffer)
    }

    /// 下载文件名: products_<YYYYMMDD_HHmmss>.xlsx
    pub fn file_name(now: DateTime<Local>) -> String {
        format!("products_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
    }

    /// Content-Disposition 值（RFC 5987,文件名经百分号编码）
    pub fn content_disposition(now: DateTime<Local>) -> String {
        format!(
            "attachment; filename*=UTF-8''{}",
            urlencoding::encode(&Self::file_name(now))
        )
    }
}
