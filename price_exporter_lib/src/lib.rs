//! Library layer for the price history exporter: query validation, the
//! date-indexed price frame, column-shape normalization, and JSON rendering.
//!
//! Wraps the `yahoo_chart_api` crate so that a `(symbol, start date)` pair
//! turns into an ordered list of `{Date, Close}` records or a typed error.

pub mod convert;
pub mod error;
pub mod export;
pub mod frame;
pub mod normalize;
pub mod query;
pub mod record;
pub mod render;
pub mod validation;

pub use yahoo_chart_api;

pub use convert::{frame_from_chart, FrameOptions};
pub use error::ExportError;
pub use export::{export, Exporter};
pub use frame::{PriceFrame, ResponseShape};
pub use normalize::normalize;
pub use query::Query;
pub use record::Record;
pub use render::{to_json, DEFAULT_PRECISION};
