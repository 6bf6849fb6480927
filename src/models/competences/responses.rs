use serde::Serialize;

use super::entities::Competence;

// 能力列表响应
#[derive(Debug, Serialize)]
pub struct CompetenceListResponse {
    pub total: usize,
    pub items: Vec<Competence>,
}

impl From<Vec<Competence>> for CompetenceListResponse {
    fn from(items: Vec<Competence>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}
