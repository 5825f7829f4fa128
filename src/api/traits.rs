use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for anything that can supply the full property list.
/// Production uses the REST backend; tests substitute canned fixtures.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch every property the source knows about.
    async fn fetch_all(&self) -> Result<Vec<Property>>;

    /// Get the name of the source, for diagnostics.
    fn source_name(&self) -> &'static str;
}
