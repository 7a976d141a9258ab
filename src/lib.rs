//! # elibrary Harvest
//!
//! 登录 elibrary.ru，选定作者，逐页抓取其出版物和引用，并找出缺少被引作品链接的错误引用
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露 `PageDriver` 能力
//! - `Extraction` - 每种页面的具名提取约定，页面选择器只出现在这里
//!
//! ### ② 业务能力层（Services）
//! - `SessionStore` - cookie 文件读写
//! - `AuthenticationFlow` - 登录
//! - `AuthorResolver` - 作者查询与确认
//! - `ReferenceClassifier` - 错误引用分类
//!
//! ### ③ 流程层（Workflow）
//! - `PaginatedCollector` - 通用分页收集算法
//! - `Listing` / `DriverPageSource` - 出版物与引用两种列表
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/harvester` - 一次完整抓取的顺序编排
//! - `orchestrator/app` - 管理浏览器资源

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{ChromeDriver, Extraction, Navigation, PageDriver};
pub use models::{Author, Cookie, Item, RawReference, Reference, Session};
pub use orchestrator::{App, HarvestOutcome, HarvestReport, Harvester};
pub use workflow::{PaginatedCollector, RetryPolicy};
