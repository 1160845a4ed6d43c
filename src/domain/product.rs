// ==========================================
// 商品カタログ管理 - 商品实体
// ==========================================
// 业务键: product_code（唯一，≤20 字符，半角英数字+连字符）
// 弱外键: category 按"分类名"关联 categories.category_name（既有口径）
// ==========================================

use crate::domain::types::ProductStatus;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 系统主键（新建时为 None，由数据库分配）
    pub id: Option<i64>,
    /// 商品编码（业务键）
    pub product_code: String,
    /// 商品名称（≤200 字符）
    pub product_name: String,
    /// 分类名（弱外键）
    pub category: String,
    /// 单价（≥0）
    pub price: Decimal,
    /// 库存数量（≥0）
    pub stock_quantity: i32,
    /// 状态
    pub status: ProductStatus,
    /// 描述（可空）
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// 用业务键与必填字段构造新商品（id 由数据库分配）
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_code: String,
        product_name: String,
        category: String,
        price: Decimal,
        stock_quantity: i32,
        status: ProductStatus,
        description: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            product_code,
            product_name,
            category,
            price,
            stock_quantity,
            status,
            description,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_serde_camel_case_contract() {
        let product = Product::new(
            "P-001".to_string(),
            "テスト商品".to_string(),
            "家電".to_string(),
            dec!(1980.00),
            10,
            ProductStatus::Active,
            None,
        );
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["productCode"], "P-001");
        assert_eq!(json["stockQuantity"], 10);
        assert_eq!(json["status"], "ACTIVE");
        // serde-float: 单价以数値输出
        assert!(json["price"].is_number());
    }
}
