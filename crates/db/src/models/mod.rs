pub mod process_log;
