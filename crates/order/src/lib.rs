pub mod client;

pub use client::{DataSourceError, OrderClient};
