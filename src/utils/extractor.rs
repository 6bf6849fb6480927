//! 路径参数提取器
//!
//! 在进入业务逻辑前拒绝非整数或非正数的 ID。

use actix_web::HttpResponse;

use crate::models::{ApiResponse, ErrorCode};

/// 路径 ID 不合法时的 400 响应
pub fn invalid_path_id_response(name: &str, raw: Option<&str>) -> HttpResponse {
    let message = match raw {
        Some(raw) => format!("Invalid {name}: '{raw}' must be a positive integer"),
        None => format!("Missing path parameter: {name}"),
    };
    HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParameter, message))
}

/// 解析正整数 ID
pub fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}

/// 定义一个从路径中提取正整数 ID 的类型
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let raw = req.match_info().get($param);
                let result = match raw.and_then($crate::utils::extractor::parse_positive_id) {
                    Some(id) => Ok($name(id)),
                    None => Err(actix_web::error::InternalError::from_response(
                        format!("invalid path parameter {}", $param),
                        $crate::utils::extractor::invalid_path_id_response($param, raw),
                    )
                    .into()),
                };
                futures_util::future::ready(result)
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeClassroomIdI64, "classroom_id");
define_safe_i64_extractor!(SafeCompetenceIdI64, "competence_id");

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::FromRequest;
    use actix_web::test::TestRequest;

    #[test]
    fn test_parse_positive_id() {
        assert_eq!(parse_positive_id("42"), Some(42));
        assert_eq!(parse_positive_id("0"), None);
        assert_eq!(parse_positive_id("-3"), None);
        assert_eq!(parse_positive_id("abc"), None);
        assert_eq!(parse_positive_id("1.5"), None);
    }

    #[actix_web::test]
    async fn test_extracts_positive_id() {
        let req = TestRequest::default()
            .param("classroom_id", "7")
            .to_http_request();
        let extracted = SafeClassroomIdI64::extract(&req).await.unwrap();
        assert_eq!(extracted, SafeClassroomIdI64(7));
    }

    #[actix_web::test]
    async fn test_rejects_non_positive_id() {
        let req = TestRequest::default().param("id", "0").to_http_request();
        let err = SafeIDI64::extract(&req).await.unwrap_err();
        assert_eq!(
            err.error_response().status(),
            actix_web::http::StatusCode::BAD_REQUEST
        );
    }
}
