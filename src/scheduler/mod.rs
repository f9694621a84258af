pub mod database_sync;
