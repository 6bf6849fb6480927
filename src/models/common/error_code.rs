use serde::Serialize;

/// 响应业务码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    BadRequest = 1000,
    InvalidParameter = 1001,
    InvalidJson = 1002,

    // 资源不存在
    NotFound = 2000,
    ClassroomNotFound = 2001,
    CompetenceNotFound = 2002,
    StudentNotInClassroom = 2003,

    // 服务端错误
    InternalServerError = 5000,
    DatabaseError = 5001,
}
