pub mod splitter;
pub mod text;
pub mod counter;
pub mod platform;
pub mod download_list;
pub mod config;
pub mod error;
pub mod io;
