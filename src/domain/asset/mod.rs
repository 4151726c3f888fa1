//! Asset storage domain

mod store;

pub use store::AssetStore;

#[cfg(test)]
pub use store::mock::MockAssetStore;
