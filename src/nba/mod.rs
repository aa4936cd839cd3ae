//! NBA stats API access and the aggregation/projection core.

pub mod chart;
pub mod compute;
pub mod http;
pub mod normalize;
pub mod resolve;
pub mod types;
