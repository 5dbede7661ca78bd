//! Building blocks shared by the pages.

mod insight;
mod metric;
mod status;

pub use insight::InsightBox;
pub use metric::MetricCard;
pub use status::{Loading, query_view};
