// ==========================================
// 商品カタログ管理 - 行级校验器
// ==========================================
// 职责: 对解码后的一行施加字段级业务规则
// 口径: 规则彼此独立,一行可同时产生多条错误;
//       校验是纯函数,分类集合由编排器一次加载后按值传入
// ==========================================

use crate::domain::import::{ImportError, RawProductRow};
use crate::domain::types::ProductStatus;
use crate::i18n;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::LazyLock;

/// 商品编码上限（字符数）
pub const PRODUCT_CODE_MAX_LEN: usize = 20;

/// 商品名上限（字符数）
pub const PRODUCT_NAME_MAX_LEN: usize = 200;

// 半角英数字+连字符
static PRODUCT_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

// ==========================================
// RowValidator - 行级校验器
// ==========================================
pub struct RowValidator {
    valid_categories: HashSet<String>,
}

impl RowValidator {
    /// # 参数
    /// - valid_categories: 有效分类名集合（每次导入只加载一次）
    pub fn new(valid_categories: HashSet<String>) -> Self {
        Self { valid_categories }
    }

    /// 校验一行,返回 0 条以上的字段级错误
    ///
    /// 规则:
    /// - 商品编码: 必填；否则 ≤20 字符且为半角英数字+连字符
    /// - 商品名: 必填；否则 ≤200 字符
    /// - 分类: 必填；否则须属于有效分类名集合
    /// - 单价: 必填（非空）；否则 ≥0
    /// - 库存数量: 必填（非空）；否则 ≥0
    /// - 状态: 必填；否则须为 ACTIVE/INACTIVE/DISCONTINUED 之一
    /// - 描述: 无规则
    pub fn validate(&self, row: &RawProductRow) -> Vec<ImportError> {
        let mut errors = Vec::new();
        let row_number = row.row_number;

        // 商品编码
        match non_blank(&row.product_code) {
            None => errors.push(field_error(
                row_number,
                "field.product_code",
                "import.product_code_required",
            )),
            Some(code) => {
                if code.chars().count() > PRODUCT_CODE_MAX_LEN
                    || !PRODUCT_CODE_PATTERN.is_match(code)
                {
                    errors.push(field_error(
                        row_number,
                        "field.product_code",
                        "import.product_code_format",
                    ));
                }
            }
        }

        // 商品名
        match non_blank(&row.product_name) {
            None => errors.push(field_error(
                row_number,
                "field.product_name",
                "import.product_name_required",
            )),
            Some(name) => {
                if name.chars().count() > PRODUCT_NAME_MAX_LEN {
                    errors.push(field_error(
                        row_number,
                        "field.product_name",
                        "import.product_name_length",
                    ));
                }
            }
        }

        // 分类（按名弱关联,集合成员判定）
        match non_blank(&row.category) {
            None => errors.push(field_error(
                row_number,
                "field.category",
                "import.category_required",
            )),
            Some(category) => {
                if !self.valid_categories.contains(category) {
                    errors.push(field_error(
                        row_number,
                        "field.category",
                        "import.category_invalid",
                    ));
                }
            }
        }

        // 单价
        match row.price {
            None => errors.push(field_error(
                row_number,
                "field.price",
                "import.price_required",
            )),
            Some(price) => {
                if price < Decimal::ZERO {
                    errors.push(field_error(
                        row_number,
                        "field.price",
                        "import.price_range",
                    ));
                }
            }
        }

        // 库存数量
        match row.stock_quantity {
            None => errors.push(field_error(
                row_number,
                "field.stock_quantity",
                "import.stock_quantity_required",
            )),
            Some(quantity) => {
                if quantity < 0 {
                    errors.push(field_error(
                        row_number,
                        "field.stock_quantity",
                        "import.stock_quantity_range",
                    ));
                }
            }
        }

        // 状态
        match non_blank(&row.status) {
            None => errors.push(field_error(
                row_number,
                "field.status",
                "import.status_required",
            )),
            Some(status) => {
                if ProductStatus::parse(status).is_none() {
                    errors.push(field_error(
                        row_number,
                        "field.status",
                        "import.status_invalid",
                    ));
                }
            }
        }

        errors
    }
}

fn field_error(row: usize, field_key: &str, message_key: &str) -> ImportError {
    ImportError {
        row,
        field: i18n::t(field_key),
        message: i18n::t(message_key),
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
