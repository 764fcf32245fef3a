pub mod process_log_repo;

pub use process_log_repo::ProcessLogRepo;
