//! Storage layer for questchat.
//!
//! `SQLite`-backed key-value persistence. The focus session log lives under a
//! single key in this store.

mod database;
mod kv;
mod migrations;

pub use database::Database;
pub use kv::KeyValueStore;
