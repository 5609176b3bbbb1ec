pub mod error;
pub mod validated_json;

pub use error::{ApiError, INTERNAL_ERROR, USER_NOT_FOUND};
pub use validated_json::ValidatedJson;
