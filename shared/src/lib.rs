pub mod dto {
    pub mod payload;
    pub mod records;
}

pub mod error;

// Re-export commonly used items
pub use error::{DashboardError, Result};

pub use dto::payload::DashboardPayload;
pub use dto::records::{
    BubblePoint, CategoryCount, CategoryRating, DistributionBucket, FlowLink, GameEntry,
    HexbinPoint, KpiStat, LabelValue, MatrixCell, MekkoCell, ProfileRecord, RangePair, SetOverlap,
    StreamPoint, TreePoint, TrendPoint,
};
