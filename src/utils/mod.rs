pub mod extractor;
pub mod parameter_error_handler;
pub mod validate;

pub use extractor::{SafeClassroomIdI64, SafeCompetenceIdI64, SafeIDI64};
pub use parameter_error_handler::{json_error_handler, path_error_handler, query_error_handler};
