pub mod create;
pub mod get;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::competences::{
    entities::{ClassroomCompetence, Competence},
    requests::CreateCompetenceRequest,
};
use crate::storage::Storage;

pub struct CompetenceService {
    storage: Arc<dyn Storage>,
}

impl CompetenceService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 创建能力
    pub async fn create_competence(&self, req: CreateCompetenceRequest) -> Result<Competence> {
        create::create_competence(self, req).await
    }

    pub async fn list_competences(&self) -> Result<Vec<Competence>> {
        get::list_competences(self).await
    }

    pub async fn get_competence(&self, competence_id: i64) -> Result<Competence> {
        get::get_competence(self, competence_id).await
    }

    // 教师创建的能力
    pub async fn list_competences_by_teacher(&self, teacher_id: i64) -> Result<Vec<Competence>> {
        get::list_competences_by_teacher(self, teacher_id).await
    }

    // 课堂关联的能力
    pub async fn list_competences_by_classroom(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<ClassroomCompetence>> {
        get::list_competences_by_classroom(self, classroom_id).await
    }
}
