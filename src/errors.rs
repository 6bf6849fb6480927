//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和错误类别。
//! 错误类别只描述失败的性质，到 HTTP 状态码的映射留在路由层完成。

use std::fmt;

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 输入不合法，不会修改任何状态
    Validation,
    /// 引用的资源不存在
    NotFound,
    /// 持久化失败或其他意外错误
    Internal,
}

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - kind() 方法 - 返回错误类别
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classroom_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $kind:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassroomError {
            $($variant(String),)*
        }

        impl ClassroomError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误类别
            pub fn kind(&self) -> ErrorKind {
                match self {
                    $(ClassroomError::$variant(_) => ErrorKind::$kind,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassroomError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassroomError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassroomError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classroom_errors! {
    DatabaseConfig("E001", "Database Configuration Error", Internal),
    DatabaseConnection("E002", "Database Connection Error", Internal),
    DatabaseOperation("E003", "Database Operation Error", Internal),
    Serialization("E004", "Serialization Error", Internal),
    FileOperation("E005", "File Operation Error", Internal),
    Validation("E006", "Validation Error", Validation),
    ClassroomNotFound("E007", "Classroom Not Found", NotFound),
    CompetenceNotFound("E008", "Competence Not Found", NotFound),
    StudentNotInClassroom("E009", "Student Not In Classroom", NotFound),
    NotFound("E010", "Resource Not Found", NotFound),
}

impl ClassroomError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为调用方可修正的错误
    pub fn is_client_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Internal)
    }
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassroomError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassroomError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassroomError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ClassroomError {
    fn from(err: std::io::Error) -> Self {
        ClassroomError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassroomError {
    fn from(err: serde_json::Error) -> Self {
        ClassroomError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassroomError::database_config("test").code(), "E001");
        assert_eq!(ClassroomError::validation("test").code(), "E006");
        assert_eq!(ClassroomError::classroom_not_found("test").code(), "E007");
        assert_eq!(ClassroomError::student_not_in_classroom("test").code(), "E009");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassroomError::competence_not_found("test").error_type(),
            "Competence Not Found"
        );
        assert_eq!(
            ClassroomError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ClassroomError::validation("bad id").kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            ClassroomError::classroom_not_found("missing").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ClassroomError::student_not_in_classroom("missing").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ClassroomError::database_operation("boom").kind(),
            ErrorKind::Internal
        );
        assert!(!ClassroomError::serialization("bad json").is_client_error());
        assert!(ClassroomError::not_found("empty").is_client_error());
    }

    #[test]
    fn test_db_err_is_internal() {
        let err: ClassroomError = sea_orm::DbErr::Custom("connection reset".into()).into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.message().contains("connection reset"));
    }

    #[test]
    fn test_format_simple() {
        let err = ClassroomError::validation("Invalid classroom id");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid classroom id"));
    }
}
