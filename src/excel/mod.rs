// ==========================================
// 商品カタログ管理 - Excel 层
// ==========================================
// 职责: 工作表导入导出
// 流程: 导入 = 解码 → 校验 → Upsert 判定 → 批量落库
//       导出 = 检索 → 逐行写出
// ==========================================

pub mod cell;
pub mod error;
pub mod exporter;
pub mod importer;
pub mod validator;

pub use error::{ExcelError, ExcelResult};
pub use exporter::{ProductExporter, EXCEL_CONTENT_TYPE};
pub use importer::ProductImporter;
pub use validator::RowValidator;
