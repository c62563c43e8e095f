pub mod config;
pub mod distance;
pub mod filters;
pub mod recommend;
pub mod tip;
pub mod watch;
