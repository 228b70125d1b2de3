//! Store layer for minder: connection pool, embedded migrations, the todo
//! row model, and query functions.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
