pub mod capture_processing;
