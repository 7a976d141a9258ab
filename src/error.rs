use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 登录时服务端返回封禁响应（账号或 IP 被封）
    #[error("该账号或 IP 地址已被 elibrary.ru 封禁")]
    AccountBlocked,

    /// 抓取过程中被重定向到错误页
    #[error("服务器错误，请稍后重试 ({url})")]
    ServerError { url: String },

    /// 会话文件存在但无法读取或已损坏
    #[error("会话文件不可用 ({path}): {reason}")]
    StorageUnavailable { path: String, reason: String },

    /// 浏览器相关错误
    #[error("浏览器错误: {0}")]
    Browser(String),

    /// 页面提取结果格式不符合约定
    #[error("提取 {contract} 失败: {reason}")]
    Extraction {
        contract: &'static str,
        reason: String,
    },

    #[error("JSON解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("文件错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置错误: {0}")]
    Config(String),

    /// 交互输入失败
    #[error("输入错误: {0}")]
    Prompt(String),
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(err.to_string())
    }
}

impl AppError {
    /// 是否为终止整个抓取的致命错误
    pub fn is_fatal_crawl_error(&self) -> bool {
        matches!(self, AppError::AccountBlocked | AppError::ServerError { .. })
    }

    /// 是否值得重试
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::ServerError { .. })
    }

    pub fn extraction(contract: &'static str, reason: impl Into<String>) -> Self {
        AppError::Extraction {
            contract,
            reason: reason.into(),
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(AppError::AccountBlocked.is_fatal_crawl_error());
        assert!(AppError::ServerError { url: "x".into() }.is_fatal_crawl_error());
        assert!(!AppError::Config("x".into()).is_fatal_crawl_error());

        assert!(AppError::ServerError { url: "x".into() }.is_transient());
        assert!(!AppError::AccountBlocked.is_transient());
    }

    #[test]
    fn test_blocked_message_mentions_block() {
        let msg = AppError::AccountBlocked.to_string();
        assert!(msg.contains("封禁"));
        assert!(msg.contains("IP"));
    }
}
