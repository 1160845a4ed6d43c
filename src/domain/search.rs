// ==========================================
// 商品カタログ管理 - 检索条件
// ==========================================
// 瞬态值对象,不落库；所有过滤条件均可缺省
// ==========================================

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 缺省页码
pub const DEFAULT_CURRENT: u32 = 1;

/// 缺省每页件数
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// 商品检索条件
///
/// - keyword: 商品名或商品编码的子串匹配（区分大小写）
/// - category / status: 完全一致
/// - price_min / price_max: 闭区间
/// - sorter: "field,direction" 形式的自由文本排序指示
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchRequest {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub price_min: Option<Decimal>,
    #[serde(default)]
    pub price_max: Option<Decimal>,
    #[serde(default = "default_current")]
    pub current: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default)]
    pub sorter: Option<String>,
}

fn default_current() -> u32 {
    DEFAULT_CURRENT
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for ProductSearchRequest {
    fn default() -> Self {
        Self {
            keyword: None,
            category: None,
            status: None,
            price_min: None,
            price_max: None,
            current: DEFAULT_CURRENT,
            page_size: DEFAULT_PAGE_SIZE,
            sorter: None,
        }
    }
}
