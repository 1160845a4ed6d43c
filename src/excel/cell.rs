// ==========================================
// 商品カタログ管理 - 单元格解码
// ==========================================
// 职责: 把异构存储类型的单元格归一化为"类型化、可空"的领域值
// 口径: 单元格的存储类型（文本/数值/空白）与字段的逻辑类型无关,
//       这里按目标语义各给一个转换函数,下游只面对 Option<T>
// ==========================================

use crate::domain::import::RawProductRow;
use calamine::Data;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// 文本语义取值
///
/// - 单元格缺失 / 空白 → None
/// - 文本单元格 → 去除首尾空白
/// - 数值单元格 → 截断为整数后的字符串表现（"1001.0" → "1001"）
/// - 其他类型 → 缺省文本表现,去除首尾空白
pub fn cell_string(row: &[Data], col: usize) -> Option<String> {
    match row.get(col) {
        None | Some(Data::Empty) => None,
        Some(Data::String(s)) => Some(s.trim().to_string()),
        Some(Data::Float(f)) => Some(format!("{}", *f as i64)),
        Some(Data::Int(i)) => Some(i.to_string()),
        Some(other) => Some(other.to_string().trim().to_string()),
    }
}

/// 小数语义取值
///
/// - 数值单元格 → 精确小数
/// - 文本单元格 → 去空白后解析；解析失败 → None（是否必填由校验器判定）
/// - 其余 → None
pub fn cell_decimal(row: &[Data], col: usize) -> Option<Decimal> {
    match row.get(col) {
        Some(Data::Float(f)) => Decimal::from_f64(*f),
        Some(Data::Int(i)) => Some(Decimal::from(*i)),
        Some(Data::String(s)) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}

/// 整数语义取值（与小数对称,数值截断取整）
pub fn cell_integer(row: &[Data], col: usize) -> Option<i32> {
    match row.get(col) {
        Some(Data::Float(f)) => Some(*f as i32),
        Some(Data::Int(i)) => Some(*i as i32),
        Some(Data::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// 整行空白判定（全部单元格为空 → 该行不参与导入,也不计入行数）
pub fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

/// 按固定列序解码一行商品记录
///
/// 列序: 商品编码 / 商品名 / 分类 / 单价 / 库存数量 / 状态 / 描述
pub fn decode_product_row(row: &[Data], row_number: usize) -> RawProductRow {
    RawProductRow {
        row_number,
        product_code: cell_string(row, 0),
        product_name: cell_string(row, 1),
        category: cell_string(row, 2),
        price: cell_decimal(row, 3),
        stock_quantity: cell_integer(row, 4),
        status: cell_string(row, 5),
        description: cell_string(row, 6),
    }
}
