// ==========================================
// 商品カタログ管理 - 检索条件构造
// ==========================================
// 职责:
// - ProductFilter: 把检索请求翻译为 WHERE 片段 + 位置参数（AND 连接）
// - SortSpec: 把 "field,direction" 自由文本翻译为 ORDER BY 片段
// ==========================================

use crate::domain::search::ProductSearchRequest;
use rusqlite::types::Value;
use rust_decimal::prelude::ToPrimitive;

// ==========================================
// ProductFilter - 过滤条件构造器
// ==========================================

/// 商品过滤条件
///
/// 条件全部可缺省；缺省条件不产生子句（等价于恒真），
/// 因此无任何条件时退化为全量匹配。无错误路径。
#[derive(Debug)]
pub struct ProductFilter {
    clauses: Vec<String>,
    params: Vec<Value>,
}

impl ProductFilter {
    /// 从检索请求构造过滤条件
    ///
    /// - keyword: 商品名 OR 商品编码的子串包含（instr,区分大小写）
    /// - category / status: 完全一致
    /// - price_min / price_max: 闭区间
    pub fn from_request(req: &ProductSearchRequest) -> Self {
        let mut clauses = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(keyword) = non_blank(req.keyword.as_deref()) {
            clauses
                .push("(instr(product_name, ?) > 0 OR instr(product_code, ?) > 0)".to_string());
            params.push(Value::Text(keyword.to_string()));
            params.push(Value::Text(keyword.to_string()));
        }
        if let Some(category) = non_blank(req.category.as_deref()) {
            clauses.push("category = ?".to_string());
            params.push(Value::Text(category.to_string()));
        }
        if let Some(status) = non_blank(req.status.as_deref()) {
            clauses.push("status = ?".to_string());
            params.push(Value::Text(status.to_string()));
        }
        if let Some(price_min) = req.price_min {
            clauses.push("price >= ?".to_string());
            params.push(Value::Real(price_min.to_f64().unwrap_or(0.0)));
        }
        if let Some(price_max) = req.price_max {
            clauses.push("price <= ?".to_string());
            params.push(Value::Real(price_max.to_f64().unwrap_or(0.0)));
        }

        Self { clauses, params }
    }

    /// WHERE 片段（无条件时为空串）
    pub fn where_sql(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clauses.join(" AND "))
        }
    }

    /// 位置参数（与 where_sql 中 ? 的顺序一致）
    pub fn params(&self) -> &[Value] {
        &self.params
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

// ==========================================
// SortSpec - 排序指示解析
// ==========================================

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// 排序指示
///
/// 解析策略：空白、或逗号分段数不为 2 时，一律回落到按 id 升序；
/// 方向仅在（不区分大小写地）等于 "desc" 时取降序，其余一律升序。
/// 字段名不做白名单校验：未知字段以带引号的标识符透传，
/// 在数据库 prepare 阶段以查询错误浮出（既有口径，保持不变）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    /// 缺省排序：按 id 升序
    pub fn ascending_by_id() -> Self {
        Self {
            field: "id".to_string(),
            direction: SortDirection::Asc,
        }
    }

    /// 解析 "field,direction" 形式的排序指示
    pub fn parse(sorter: Option<&str>) -> Self {
        let Some(sorter) = sorter else {
            return Self::ascending_by_id();
        };
        if sorter.trim().is_empty() {
            return Self::ascending_by_id();
        }

        // 末尾空分段不计入分段数（"price," 视为单分段）
        let mut parts: Vec<&str> = sorter.split(',').collect();
        while parts.last().is_some_and(|p| p.is_empty()) {
            parts.pop();
        }
        if parts.len() != 2 {
            return Self::ascending_by_id();
        }

        let direction = if parts[1].eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        Self {
            field: parts[0].to_string(),
            direction,
        }
    }

    /// ORDER BY 片段
    ///
    /// 已知属性名映射到列名；未知字段带引号透传,
    /// 引号转义保证原始文本不会拼接出额外 SQL。
    pub fn order_by_sql(&self) -> String {
        let column = match column_for_field(&self.field) {
            Some(col) => col.to_string(),
            None => format!("\"{}\"", self.field.replace('"', "\"\"")),
        };
        format!(" ORDER BY {} {}", column, self.direction.as_sql())
    }
}

/// 已知排序属性名 → 列名
///
/// 对外契约使用 camelCase 属性名；snake_case 列名本身不在映射表中，
/// 走"未知字段透传"路径后仍命中真实列。
fn column_for_field(field: &str) -> Option<&'static str> {
    match field {
        "id" => Some("id"),
        "productCode" => Some("product_code"),
        "productName" => Some("product_name"),
        "category" => Some("category"),
        "price" => Some("price"),
        "stockQuantity" => Some("stock_quantity"),
        "status" => Some("status"),
        "description" => Some("description"),
        "createdAt" => Some("created_at"),
        "updatedAt" => Some("updated_at"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_filter_empty_request_matches_all() {
        let filter = ProductFilter::from_request(&ProductSearchRequest::default());
        assert_eq!(filter.where_sql(), "");
        assert!(filter.params().is_empty());
    }

    #[test]
    fn test_filter_blank_strings_are_ignored() {
        let req = ProductSearchRequest {
            keyword: Some("   ".to_string()),
            category: Some(String::new()),
            status: Some(" ".to_string()),
            ..Default::default()
        };
        let filter = ProductFilter::from_request(&req);
        assert_eq!(filter.where_sql(), "");
    }

    #[test]
    fn test_filter_keyword_matches_name_or_code() {
        let req = ProductSearchRequest {
            keyword: Some("P-0".to_string()),
            ..Default::default()
        };
        let filter = ProductFilter::from_request(&req);
        assert_eq!(
            filter.where_sql(),
            " WHERE (instr(product_name, ?) > 0 OR instr(product_code, ?) > 0)"
        );
        assert_eq!(filter.params().len(), 2);
    }

    #[test]
    fn test_filter_all_conditions_joined_with_and() {
        let req = ProductSearchRequest {
            keyword: Some("mouse".to_string()),
            category: Some("家電".to_string()),
            status: Some("ACTIVE".to_string()),
            price_min: Some(dec!(100)),
            price_max: Some(dec!(5000)),
            ..Default::default()
        };
        let filter = ProductFilter::from_request(&req);
        let sql = filter.where_sql();
        assert!(sql.contains("category = ?"));
        assert!(sql.contains("status = ?"));
        assert!(sql.contains("price >= ?"));
        assert!(sql.contains("price <= ?"));
        assert_eq!(sql.matches(" AND ").count(), 4);
        assert_eq!(filter.params().len(), 6);
    }

    #[test]
    fn test_sort_blank_defaults_to_id_asc() {
        assert_eq!(SortSpec::parse(None), SortSpec::ascending_by_id());
        assert_eq!(SortSpec::parse(Some("")), SortSpec::ascending_by_id());
        assert_eq!(SortSpec::parse(Some("   ")), SortSpec::ascending_by_id());
    }

    #[test]
    fn test_sort_wrong_part_count_defaults_to_id_asc() {
        assert_eq!(SortSpec::parse(Some("price")), SortSpec::ascending_by_id());
        assert_eq!(
            SortSpec::parse(Some("price,desc,extra")),
            SortSpec::ascending_by_id()
        );
        // 末尾空分段被丢弃 → 单分段 → 回落
        assert_eq!(SortSpec::parse(Some("price,")), SortSpec::ascending_by_id());
    }

    #[test]
    fn test_sort_desc_case_insensitive() {
        let spec = SortSpec::parse(Some("price,desc"));
        assert_eq!(spec.field, "price");
        assert_eq!(spec.direction, SortDirection::Desc);

        let spec = SortSpec::parse(Some("price,DESC"));
        assert_eq!(spec.direction, SortDirection::Desc);
    }

    #[test]
    fn test_sort_unknown_direction_token_is_ascending() {
        let spec = SortSpec::parse(Some("price,descend"));
        assert_eq!(spec.direction, SortDirection::Asc);
        let spec = SortSpec::parse(Some("price,asc"));
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_camel_case_property_maps_to_column() {
        let spec = SortSpec::parse(Some("stockQuantity,desc"));
        assert_eq!(spec.order_by_sql(), " ORDER BY stock_quantity DESC");
    }

    #[test]
    fn test_sort_unknown_field_passes_through_quoted() {
        let spec = SortSpec::parse(Some("notAColumn,asc"));
        assert_eq!(spec.order_by_sql(), " ORDER BY \"notAColumn\" ASC");
    }
}
