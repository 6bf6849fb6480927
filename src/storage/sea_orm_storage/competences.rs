//! 能力存储操作

use super::SeaOrmStorage;
use crate::entity::classroom_competences::{
    Column as ClassroomCompetenceColumn, Entity as ClassroomCompetences,
};
use crate::entity::competences::{ActiveModel, Column, Entity as Competences};
use crate::errors::{ClassroomError, Result};
use crate::models::competences::{
    entities::{ClassroomCompetence, Competence},
    requests::CreateCompetenceRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建能力
    pub async fn create_competence_impl(&self, req: CreateCompetenceRequest) -> Result<Competence> {
        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            teacher_id: Set(req.id_teacher),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建能力失败: {e}")))?;

        Ok(result.into_competence())
    }

    /// 通过 ID 获取能力
    pub async fn get_competence_by_id_impl(&self, competence_id: i64) -> Result<Option<Competence>> {
        let result = Competences::find_by_id(competence_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询能力失败: {e}")))?;

        Ok(result.map(|m| m.into_competence()))
    }

    /// 列出全部能力
    pub async fn list_competences_impl(&self) -> Result<Vec<Competence>> {
        let competences = Competences::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询能力列表失败: {e}")))?;

        Ok(competences.into_iter().map(|m| m.into_competence()).collect())
    }

    /// 列出教师创建的能力
    pub async fn list_competences_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Competence>> {
        let competences = Competences::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询教师能力失败: {e}")))?;

        Ok(competences.into_iter().map(|m| m.into_competence()).collect())
    }

    /// 列出课堂关联的能力及总分
    pub async fn list_classroom_competences_impl(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<ClassroomCompetence>> {
        let rows = ClassroomCompetences::find()
            .filter(ClassroomCompetenceColumn::ClassroomId.eq(classroom_id))
            .order_by_asc(ClassroomCompetenceColumn::Id)
            .find_also_related(Competences)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂能力失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(association, competence)| {
                competence.map(|c| ClassroomCompetence {
                    id_competence: c.id,
                    name: c.name,
                    description: c.description,
                    total_points: association.total_points,
                })
            })
            .collect())
    }

    /// 按 ID 批量查找能力
    pub async fn find_competences_by_ids_impl(
        &self,
        competence_ids: &[i64],
    ) -> Result<Vec<Competence>> {
        if competence_ids.is_empty() {
            return Ok(Vec::new());
        }

        let competences = Competences::find()
            .filter(Column::Id.is_in(competence_ids.iter().copied()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询能力失败: {e}")))?;

        Ok(competences.into_iter().map(|m| m.into_competence()).collect())
    }
}
