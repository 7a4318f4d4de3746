extern crate chrono;
extern crate colored;
extern crate serde;
extern crate serde_json;

mod tasklist;

pub mod command;
pub mod config;
pub mod error;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod task;
pub mod theme;
pub mod traits;
pub mod view;
pub mod viewer;

pub use tasklist::*;
