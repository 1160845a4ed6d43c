// ==========================================
// 商品カタログ管理 - 分类 API
// ==========================================
// 职责: 分类一览（检索条件与导入画面的下拉数据源）
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::category::Category;
use crate::repository::CategoryRepository;
use std::sync::Arc;

pub struct CategoryApi {
    category_repo: Arc<CategoryRepository>,
}

impl CategoryApi {
    pub fn new(category_repo: Arc<CategoryRepository>) -> Self {
        Self { category_repo }
    }

    /// 分类一览（按展示顺序）
    pub fn list(&self) -> ApiResult<Vec<Category>> {
        Ok(self.category_repo.find_all()?)
    }
}
