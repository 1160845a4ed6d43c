// ==========================================
// 商品カタログ管理 - 导入值对象
// ==========================================
// 职责: 单行解码结果、行级错误、导入汇总
// 行级错误是"数据"而非异常,不中断整批导入
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 一行工作表解码后的原始商品记录
///
/// 各字段均为 Option：单元格缺失、空白或解析失败统一为 None，
/// 是否必填交由校验器判定。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProductRow {
    /// 表内可见行号（1 起算,含表头行）
    pub row_number: usize,
    pub product_code: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// 行级导入错误（对外返回,字段名与消息均已本地化）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportError {
    /// 表内可见行号（1 起算）
    pub row: usize,
    /// 字段显示名
    pub field: String,
    /// 违反规则的说明
    pub message: String,
}

/// 导入汇总结果
///
/// success 恒为 true：导入失败按"行"上报,不上报为整体失败
/// （整体失败仅发生在文件不可读等致命错误,此时以 Err 返回）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub success: bool,
    /// 处理的数据行数（不含表头,不含整行空白）
    pub total_rows: usize,
    pub inserted_count: usize,
    pub updated_count: usize,
    pub error_count: usize,
    pub errors: Vec<ImportError>,
}
