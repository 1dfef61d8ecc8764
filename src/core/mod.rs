pub mod analytics;
pub mod directory;
pub mod enrich;
pub mod filter;
pub mod log;
pub mod preferences;
pub mod session;
pub mod source;
pub mod storage;
