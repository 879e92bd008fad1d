pub mod error_mapper;

pub use error_mapper::report_load_error;
