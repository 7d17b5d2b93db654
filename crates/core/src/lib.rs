pub mod types;

pub use types::{OrderPageData, OrderReadinessRecord};
