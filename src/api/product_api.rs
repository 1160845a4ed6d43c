// ==========================================
// 商品カタログ管理 - 商品 API
// ==========================================
// 职责: 商品检索、单条维护
// 口径: 检索读事务;维护写事务;未找到按业务错误上报
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::product::Product;
use crate::domain::search::ProductSearchRequest;
use crate::i18n;
use crate::repository::query::SortSpec;
use crate::repository::ProductRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

// ==========================================
// PageResponse - 分页响应
// ==========================================
/// 分页响应（对外契约: camelCase）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub data: Vec<T>,
    /// 满足条件的总件数（非当前页件数）
    pub total: i64,
    pub success: bool,
    pub current: u32,
    pub page_size: u32,
}

// ==========================================
// ProductApi - 商品 API
// ==========================================
pub struct ProductApi {
    product_repo: Arc<ProductRepository>,
}

impl ProductApi {
    pub fn new(product_repo: Arc<ProductRepository>) -> Self {
        Self { product_repo }
    }

    /// 分页检索商品
    ///
    /// # 参数
    /// - req: 检索条件（过滤 + 分页 + 排序指示）
    ///
    /// # 说明
    /// - 排序指示不做字段白名单校验,非法字段名在查询执行时以数据库错误浮出
    pub fn search(&self, req: &ProductSearchRequest) -> ApiResult<PageResponse<Product>> {
        let sort = SortSpec::parse(req.sorter.as_deref());
        debug!(?sort, current = req.current, page_size = req.page_size, "商品检索");

        let (data, total) = self.product_repo.search(req, &sort)?;
        Ok(PageResponse {
            data,
            total,
            success: true,
            current: req.current,
            page_size: req.page_size,
        })
    }

    /// 按 id 查询；未命中按业务错误上报
    pub fn find_by_id(&self, id: i64) -> ApiResult<Product> {
        self.product_repo.find_by_id(id)?.ok_or_else(|| {
            ApiError::NotFound(i18n::t_with_args(
                "api.product_not_found",
                &[("id", &id.to_string())],
            ))
        })
    }

    /// 新建商品
    pub fn create(&self, product: Product) -> ApiResult<Product> {
        Ok(self.product_repo.insert(product)?)
    }

    /// 按 id 覆写商品（全字段,包括商品编码）
    pub fn update(&self, id: i64, product: Product) -> ApiResult<Product> {
        let mut existing = self.find_by_id(id)?;
        existing.product_code = product.product_code;
        existing.product_name = product.product_name;
        existing.category = product.category;
        existing.price = product.price;
        existing.stock_quantity = product.stock_quantity;
        existing.status = product.status;
        existing.description = product.description;

        self.product_repo.update(&existing)?;
        self.find_by_id(id)
    }

    /// 按 id 删除商品
    pub fn delete(&self, id: i64) -> ApiResult<()> {
        // 先确认存在,未找到按业务错误上报
        self.find_by_id(id)?;
        self.product_repo.delete(id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_response_serde_contract() {
        let page = PageResponse::<i32> {
            data: vec![1, 2],
            total: 12,
            success: true,
            current: 1,
            page_size: 20,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pageSize"], 20);
        assert_eq!(json["total"], 12);
        assert_eq!(json["success"], true);
    }
}
