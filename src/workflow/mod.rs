pub mod listing;
pub mod paginated_collector;

pub use listing::{DriverPageSource, Listing};
pub use paginated_collector::{PageOutcome, PageSource, PaginatedCollector, RetryPolicy};
