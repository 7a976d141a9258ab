//! 编排层（Orchestration Layer）
//!
//! ```text
//! app (持有 Browser / ChromeDriver)
//!     ↓
//! harvester (会话 → 作者 → 出版物 → 引用 → 分类)
//!     ↓
//! workflow::PaginatedCollector (逐页收集)
//!     ↓
//! services (能力层：session / auth / author / classifier)
//!     ↓
//! infrastructure (基础设施：PageDriver)
//! ```

pub mod app;
pub mod harvester;

pub use app::{failure_message, print_outcome, App};
pub use harvester::{HarvestOutcome, HarvestReport, Harvester};
