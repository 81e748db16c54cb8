// Scrape-time metric collection
pub mod collector;

pub use collector::SnapshotCollector;
