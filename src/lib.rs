pub mod app;
pub mod core;
pub mod notifications;
pub mod scanner;
pub mod services;

include!(concat!(env!("OUT_DIR"), "/version.rs"));
