pub mod analytics;
pub mod bookmark;
pub mod bookmarks;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod promote;
pub mod shell;
pub mod show;
