pub mod chrome_driver;
pub mod extraction;
pub mod page_driver;

pub use chrome_driver::ChromeDriver;
pub use extraction::Extraction;
pub use page_driver::{extract_as, Navigation, PageDriver};
