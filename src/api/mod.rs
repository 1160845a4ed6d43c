// ==========================================
// 商品カタログ管理 - API 层
// ==========================================
// 职责: 面向外层（HTTP 控制器等）的业务接口
// ==========================================

pub mod category_api;
pub mod error;
pub mod product_api;

pub use category_api::CategoryApi;
pub use error::{ApiError, ApiResult};
pub use product_api::{PageResponse, ProductApi};
