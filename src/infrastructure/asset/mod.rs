//! Asset storage infrastructure module

mod local_store;

pub use local_store::LocalAssetStore;
