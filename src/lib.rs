// ==========================================
// 商品カタログ管理 - 核心库
// ==========================================
// 技术栈: Rust + SQLite + calamine / rust_xlsxwriter
// 系统定位: 商品目录 CRUD 后端（检索 / 单条维护 / Excel 批量导入导出）
// ==========================================

// 初始化国际化系统（默认回落到日文,与既有业务口径一致）
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问与查询构造
pub mod repository;

// Excel 层 - 导入导出
pub mod excel;

// 配置层 - 运行配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一/建表）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::ProductStatus;

// 领域实体与值对象
pub use domain::{
    Category, ImportError, ImportResult, Product, ProductSearchRequest, RawProductRow,
};

// Excel 入出力
pub use excel::{ProductExporter, ProductImporter, RowValidator};

// API
pub use api::{CategoryApi, PageResponse, ProductApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "商品カタログ管理";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
