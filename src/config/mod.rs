// ==========================================
// 商品カタログ管理 - 运行配置
// ==========================================
// 职责: 数据库路径与语言环境的解析
// 来源: 环境变量,缺省回落到系统数据目录
// ==========================================

use std::path::PathBuf;

/// 数据库路径环境变量
pub const ENV_DB_PATH: &str = "CATALOG_DB_PATH";

/// 语言环境变量
pub const ENV_LOCALE: &str = "CATALOG_LOCALE";

/// 缺省语言（既有业务口径为日文）
pub const DEFAULT_LOCALE: &str = "ja";

/// 应用运行配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite 数据库文件路径
    pub db_path: PathBuf,
    /// 消息语言（"ja" / "zh-CN" / "en"）
    pub locale: String,
}

impl AppConfig {
    /// 从环境变量读取配置
    ///
    /// # 说明
    /// - CATALOG_DB_PATH 未设置时，使用系统数据目录下的 product-catalog/catalog.db
    /// - CATALOG_LOCALE 未设置时，使用 "ja"
    pub fn from_env() -> Self {
        let db_path = std::env::var(ENV_DB_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_db_path());

        let locale = std::env::var(ENV_LOCALE).unwrap_or_else(|_| DEFAULT_LOCALE.to_string());

        Self { db_path, locale }
    }

    /// 缺省数据库路径（系统数据目录下）
    pub fn default_db_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("product-catalog")
            .join("catalog.db")
    }

    /// 应用语言设置
    pub fn apply_locale(&self) {
        crate::i18n::set_locale(&self.locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_has_file_name() {
        let path = AppConfig::default_db_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("catalog.db")
        );
    }
}
