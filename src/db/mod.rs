pub mod buckets;
pub mod insights;

pub use buckets::BucketRepo;
pub use insights::InsightRepo;
