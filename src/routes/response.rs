//! 服务层结果到 HTTP 响应的映射

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult};
use serde::Serialize;
use tracing::{debug, error};

use crate::errors::{ClassroomError, ErrorKind, Result};
use crate::models::{ApiResponse, ErrorCode};

/// 错误对应的业务码
pub fn error_code_for(err: &ClassroomError) -> ErrorCode {
    match err {
        ClassroomError::Validation(_) => ErrorCode::BadRequest,
        ClassroomError::ClassroomNotFound(_) => ErrorCode::ClassroomNotFound,
        ClassroomError::CompetenceNotFound(_) => ErrorCode::CompetenceNotFound,
        ClassroomError::StudentNotInClassroom(_) => ErrorCode::StudentNotInClassroom,
        ClassroomError::NotFound(_) => ErrorCode::NotFound,
        ClassroomError::DatabaseConfig(_)
        | ClassroomError::DatabaseConnection(_)
        | ClassroomError::DatabaseOperation(_) => ErrorCode::DatabaseError,
        ClassroomError::Serialization(_) | ClassroomError::FileOperation(_) => {
            ErrorCode::InternalServerError
        }
    }
}

/// 错误类别对应的状态码
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(err: &ClassroomError) -> HttpResponse {
    if err.is_client_error() {
        debug!("{} [{}]: {}", err.error_type(), err.code(), err.message());
    } else {
        error!("{} [{}]: {}", err.error_type(), err.code(), err.message());
    }

    HttpResponse::build(status_for(err.kind()))
        .json(ApiResponse::error_empty(error_code_for(err), err.message()))
}

/// 成功时以指定状态码返回数据，失败时返回对应的错误响应
pub fn respond<T: Serialize>(
    result: Result<T>,
    status: StatusCode,
    message: &str,
) -> ActixResult<HttpResponse> {
    Ok(match result {
        Ok(data) => HttpResponse::build(status).json(ApiResponse::success(data, message)),
        Err(e) => error_response(&e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_response(&ClassroomError::validation("bad")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(&ClassroomError::student_not_in_classroom("nope")).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            error_response(&ClassroomError::database_operation("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_are_4xx() {
        for err in [
            ClassroomError::validation("bad"),
            ClassroomError::not_found("empty"),
            ClassroomError::serialization("bad json"),
            ClassroomError::database_operation("boom"),
        ] {
            let status = error_response(&err).status();
            assert_eq!(err.is_client_error(), status.is_client_error());
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            error_code_for(&ClassroomError::competence_not_found("x")),
            ErrorCode::CompetenceNotFound
        );
        assert_eq!(
            error_code_for(&ClassroomError::database_connection("x")),
            ErrorCode::DatabaseError
        );
    }
}
