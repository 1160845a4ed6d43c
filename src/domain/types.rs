// ==========================================
// 商品カタログ管理 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 商品状态 (Product Status)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库/对外契约一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,       // 贩卖中
    Inactive,     // 停售
    Discontinued, // 废番
}

impl ProductStatus {
    /// 从数据库/单元格字符串解析（区分大小写，完全一致才命中）
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(ProductStatus::Active),
            "INACTIVE" => Some(ProductStatus::Inactive),
            "DISCONTINUED" => Some(ProductStatus::Discontinued),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Inactive => "INACTIVE",
            ProductStatus::Discontinued => "DISCONTINUED",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
