//! 作者解析服务 - 业务能力层
//!
//! 两个阶段：
//! 1. 按姓氏和机构查询候选作者
//! 2. 逐个询问用户，选中一个或全部拒绝

use tracing::{debug, info};

use crate::error::AppResult;
use crate::infrastructure::{extract_as, Extraction, PageDriver};
use crate::models::Author;
use crate::services::prompt::Prompt;

const SURNAME_FIELD: &str = "surname";
const ORGANIZATION_NAME_FIELD: &str = "orgname";
const ORGANIZATION_ID_FIELD: &str = "orgid";
const SEARCH_BUTTON: &str = "#show_param .butred";

/// 用户对候选作者的回答
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Accept,
    Reject,
    /// 无法识别，需要重新询问
    Unrecognized,
}

impl Answer {
    /// 空输入视为确认，大小写不敏感
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "" | "y" => Answer::Accept,
            "n" => Answer::Reject,
            _ => Answer::Unrecognized,
        }
    }
}

/// 作者解析服务
pub struct AuthorResolver<'a, D: PageDriver + ?Sized> {
    driver: &'a D,
    authors_url: String,
    organization_name: String,
    organization_id: String,
}

impl<'a, D: PageDriver + ?Sized> AuthorResolver<'a, D> {
    pub fn new(
        driver: &'a D,
        authors_url: impl Into<String>,
        organization_name: impl Into<String>,
        organization_id: impl Into<String>,
    ) -> Self {
        Self {
            driver,
            authors_url: authors_url.into(),
            organization_name: organization_name.into(),
            organization_id: organization_id.into(),
        }
    }

    /// 查询候选作者，按服务返回的顺序
    pub async fn lookup(&self, surname: &str) -> AppResult<Vec<Author>> {
        info!("🔍 查询作者: {}", surname);

        self.driver.navigate(&self.authors_url).await?;
        self.driver.fill_field(SURNAME_FIELD, surname).await?;
        self.driver
            .fill_field(ORGANIZATION_NAME_FIELD, &self.organization_name)
            .await?;
        if !self.organization_id.is_empty() {
            if let Err(e) = self
                .driver
                .fill_field(ORGANIZATION_ID_FIELD, &self.organization_id)
                .await
            {
                debug!("未能设置机构 ID: {}", e);
            }
        }
        self.driver.click_and_wait(SEARCH_BUTTON).await?;

        let candidates: Vec<Author> = extract_as(self.driver, Extraction::AuthorList)
            .await?
            .unwrap_or_default();
        info!("✓ 找到 {} 个候选作者", candidates.len());

        Ok(candidates)
    }

    /// 查询并让用户确认，返回 None 表示没有选中任何作者
    pub async fn resolve<P: Prompt + ?Sized>(
        &self,
        surname: &str,
        prompt: &mut P,
    ) -> AppResult<Option<Author>> {
        let candidates = self.lookup(surname).await?;
        if candidates.is_empty() {
            return Ok(None);
        }
        disambiguate(candidates, prompt).await
    }
}

/// 逐个询问候选作者
///
/// 确认即返回，后面的候选不再询问；拒绝则看下一个；其他输入重新询问同一个候选
pub async fn disambiguate<P: Prompt + ?Sized>(
    candidates: Vec<Author>,
    prompt: &mut P,
) -> AppResult<Option<Author>> {
    for author in candidates {
        loop {
            let answer = prompt.ask(&format!("{}? [Y/n]: ", author.name)).await?;
            match Answer::parse(&answer) {
                Answer::Accept => {
                    info!("✓ 已选择作者: {}", author);
                    return Ok(Some(author));
                }
                Answer::Reject => break,
                Answer::Unrecognized => continue,
            }
        }
    }

    Ok(None)
}
