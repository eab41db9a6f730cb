pub mod json_history_logger;
