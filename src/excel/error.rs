// ==========================================
// 商品カタログ管理 - Excel 层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 注意: 行级校验错误不是异常,以 ImportResult.errors 返回;
//       本类型只承载整次调用级别的致命错误
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// Excel 层错误类型
#[derive(Error, Debug)]
pub enum ExcelError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("Excel 写出失败: {0}")]
    ExportWriteError(String),

    // ===== 数据访问错误 =====
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ExcelError {
    fn from(err: std::io::Error) -> Self {
        ExcelError::FileReadError(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ExcelError {
    fn from(err: calamine::XlsxError) -> Self {
        ExcelError::ExcelParseError(err.to_string())
    }
}

// 实现 From<rust_xlsxwriter::XlsxError>
impl From<rust_xlsxwriter::XlsxError> for ExcelError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExcelError::ExportWriteError(err.to_string())
    }
}

/// Result 类型别名
pub type ExcelResult<T> = Result<T, ExcelError>;
