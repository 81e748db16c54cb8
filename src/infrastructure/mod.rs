pub mod observability;
pub mod upstream;

pub use upstream::UpstreamClient;
