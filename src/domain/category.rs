// ==========================================
// 商品カタログ管理 - 分类实体
// ==========================================
// 导入管线视角下只读；按 sort_order 排序展示
// ==========================================

use serde::{Deserialize, Serialize};

/// 商品分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<i64>,
    /// 分类编码（唯一）
    pub category_code: String,
    /// 分类名（被 Product.category 按名引用）
    pub category_name: String,
    /// 展示排序
    pub sort_order: i32,
}
