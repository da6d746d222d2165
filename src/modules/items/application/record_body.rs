use crate::modules::items::application::errors::ApplicationError;
use crate::modules::items::core::record::Record;
use crate::shared::infrastructure::http::json_body::decode;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;

/// Turn a buffered request body into a record. Read and parse failures are
/// both server errors.
pub fn read_record(body: Result<Bytes, BytesRejection>) -> Result<Record, ApplicationError> {
    let bytes = body.map_err(|e| ApplicationError::BodyRead(e.body_text()))?;
    decode(&bytes).map_err(ApplicationError::Malformed)
}
