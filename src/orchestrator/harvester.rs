//! 抓取编排 - 编排层
//!
//! 顺序：会话 → 登录（按需）→ 作者解析 → 出版物 → 引用 → 分类
//!
//! 全程单线程顺序执行；致命错误直接向上返回，不保留部分结果

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageDriver;
use crate::models::{Author, Item, RawReference, Reference, Session};
use crate::services::{
    AuthenticationFlow, AuthorResolver, Credentials, MalformedReport, Prompt, ReferenceClassifier,
    SessionStore,
};
use crate::utils::logging::truncate_text;
use crate::workflow::{DriverPageSource, Listing, PaginatedCollector, RetryPolicy};

/// 一次抓取的结果
#[derive(Debug)]
pub enum HarvestOutcome {
    /// 没有找到或没有选中作者
    AuthorNotFound,
    Completed(HarvestReport),
}

#[derive(Debug)]
pub struct HarvestReport {
    pub author: Author,
    pub items: Vec<Item>,
    pub references: Vec<Reference>,
    pub malformed: MalformedReport,
}

/// 抓取编排器
///
/// 不持有浏览器，只依赖页面驱动和交互输入
pub struct Harvester<'a, D: PageDriver + ?Sized, P: Prompt + ?Sized> {
    config: &'a Config,
    driver: &'a D,
    prompt: &'a mut P,
    store: SessionStore,
    collector: PaginatedCollector,
}

impl<'a, D: PageDriver + ?Sized, P: Prompt + ?Sized> Harvester<'a, D, P> {
    pub fn new(config: &'a Config, driver: &'a D, prompt: &'a mut P) -> Self {
        Self {
            config,
            driver,
            prompt,
            store: SessionStore::new(&config.cookies_path),
            collector: PaginatedCollector::new(RetryPolicy::from_config(config)),
        }
    }

    pub async fn run(&mut self) -> AppResult<HarvestOutcome> {
        let session = self.ensure_session().await?;
        debug!("当前会话: {} 条 cookie", session.cookies().len());

        let surname = self.prompt.ask("请输入作者姓氏: ").await?;
        let resolver = AuthorResolver::new(
            self.driver,
            self.url("authors.asp"),
            &self.config.organization_name,
            &self.config.organization_id,
        );
        let Some(author) = resolver.resolve(surname.trim(), &mut *self.prompt).await? else {
            info!("未找到该姓氏的作者");
            return Ok(HarvestOutcome::AuthorNotFound);
        };

        let items: Vec<Item> = self
            .collector
            .collect(&DriverPageSource::new(
                self.driver,
                Listing::items(&self.config.base_url),
                &author.id,
            ))
            .await?;
        self.log_items(&items);

        let raw_references: Vec<RawReference> = self
            .collector
            .collect(&DriverPageSource::new(
                self.driver,
                Listing::references(&self.config.base_url),
                &author.id,
            ))
            .await?;

        let references = ReferenceClassifier::classify(raw_references);
        let malformed = ReferenceClassifier::report(&references);
        info!(
            "📊 {}: 出版物 {} 条, 引用 {} 条, 错误引用 {} 条",
            author,
            items.len(),
            references.len(),
            malformed.entries().len()
        );

        Ok(HarvestOutcome::Completed(HarvestReport {
            author,
            items,
            references,
            malformed,
        }))
    }

    /// 恢复已保存的会话，未登录时走登录流程
    async fn ensure_session(&mut self) -> AppResult<Session> {
        let session = self.store.restore_or_empty().await;

        self.driver.navigate(&self.url("defaultx.asp")).await?;
        self.driver.set_cookies(session.cookies()).await?;

        if session.is_authenticated() {
            info!("✓ 复用已保存的会话");
            return Ok(session);
        }

        warn!("没有可用的登录会话，需要登录");
        let credentials = self.prompt_credentials().await?;
        let mut flow = AuthenticationFlow::new(self.driver, &self.store, self.url("defaultx.asp"));
        flow.authenticate(&credentials).await
    }

    async fn prompt_credentials(&mut self) -> AppResult<Credentials> {
        let login = self.prompt.ask("请输入用户名: ").await?;
        let password = self
            .prompt
            .ask_secret(&format!("{} 的密码: ", login.trim()))
            .await?;
        Ok(Credentials {
            login: login.trim().to_string(),
            password,
        })
    }

    fn url(&self, page: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), page)
    }

    fn log_items(&self, items: &[Item]) {
        if !self.config.verbose_logging {
            return;
        }
        for (i, item) in items.iter().enumerate() {
            info!("  {}. {}", i + 1, truncate_text(&item.title, 80));
        }
    }
}
