//! 会话存储 - 业务能力层
//!
//! 只负责 cookie 文件的读写，不关心登录流程

use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::Session;

/// 会话存储
///
/// cookie 文件是一个 JSON 数组，每个元素是一条 cookie
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取上次保存的会话；文件不存在时返回空会话
    pub async fn restore(&self) -> AppResult<Session> {
        if !fs::try_exists(&self.path).await.unwrap_or(false) {
            debug!("会话文件不存在: {}", self.path.display());
            return Ok(Session::empty());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.unavailable(e))?;
        let session: Session = serde_json::from_str(&content).map_err(|e| self.unavailable(e))?;

        info!(
            "✓ 已加载会话: {} 条 cookie ({})",
            session.cookies().len(),
            self.path.display()
        );
        Ok(session)
    }

    /// 读取会话，文件损坏时按空会话处理
    pub async fn restore_or_empty(&self) -> Session {
        match self.restore().await {
            Ok(session) => session,
            Err(e) => {
                warn!("⚠️ {}，将重新登录", e);
                Session::empty()
            }
        }
    }

    /// 覆盖保存会话
    pub async fn persist(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(session)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;

        info!("✓ 会话已保存至: {}", self.path.display());
        Ok(())
    }

    fn unavailable(&self, err: impl std::fmt::Display) -> AppError {
        AppError::StorageUnavailable {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        }
    }
}
