//! 应用入口 - 编排层
//!
//! 持有浏览器资源，创建页面驱动并交给 `Harvester`

use chromiumoxide::Browser;
use tracing::info;

use crate::browser;
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::ChromeDriver;
use crate::orchestrator::harvester::{HarvestOutcome, Harvester};
use crate::services::StdinPrompt;
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    _browser: Browser,
    driver: ChromeDriver,
}

impl App {
    /// 初始化应用：启动或连接浏览器
    pub async fn initialize(config: Config) -> anyhow::Result<Self> {
        logging::log_startup(&config);

        let (browser, page) = match config.browser_debug_port {
            Some(port) => browser::connect_to_browser_and_page(port).await?,
            None => browser::launch_browser(&config).await?,
        };

        Ok(Self {
            config,
            _browser: browser,
            driver: ChromeDriver::new(page),
        })
    }

    /// 运行一次完整的抓取
    pub async fn run(&self) -> AppResult<HarvestOutcome> {
        let mut prompt = StdinPrompt::new();
        let outcome = Harvester::new(&self.config, &self.driver, &mut prompt)
            .run()
            .await?;
        info!("✅ 抓取结束");
        Ok(outcome)
    }
}

/// 输出最终结果
pub fn print_outcome(outcome: &HarvestOutcome) {
    match outcome {
        HarvestOutcome::AuthorNotFound => println!("未找到该姓名的作者"),
        HarvestOutcome::Completed(report) => print!("{}", report.malformed),
    }
}

/// 失败时输出给用户的信息；致命抓取错误原样输出
pub fn failure_message(err: &AppError) -> String {
    if err.is_fatal_crawl_error() {
        err.to_string()
    } else {
        format!("运行失败: {}", err)
    }
}
