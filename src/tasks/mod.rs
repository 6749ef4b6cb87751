//! Background Tasks Module
//!
//! # Tasks
//! - Cache cleanup: Removes expired word cache entries at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
