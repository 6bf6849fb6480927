use serde::Deserialize;

// 创建能力请求
#[derive(Debug, Deserialize)]
pub struct CreateCompetenceRequest {
    pub name: String,
    pub description: Option<String>,
    pub id_teacher: i64,
}
