//! Infrastructure layer - storage and filesystem implementations

pub mod fs;
pub mod storage;

pub use fs::FsAttachmentStore;
