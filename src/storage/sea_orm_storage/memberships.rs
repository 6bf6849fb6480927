//! 课堂成员关联存储操作

use super::SeaOrmStorage;
use crate::entity::{classroom_competences, classroom_students, classroom_teachers};
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::entities::{MembershipKind, TeacherRole};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TryInsertResult,
};

impl SeaOrmStorage {
    /// 逐行插入，冲突的行被跳过，返回实际插入的行数
    pub(super) async fn insert_ignoring_conflicts<A>(
        &self,
        models: Vec<A>,
        on_conflict: OnConflict,
    ) -> std::result::Result<u64, DbErr>
    where
        A: ActiveModelTrait + Send,
        <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    {
        let mut inserted = 0;

        for model in models {
            let result = A::Entity::insert(model)
                .on_conflict(on_conflict.clone())
                .do_nothing()
                .exec_without_returning(&self.db)
                .await?;

            if let TryInsertResult::Inserted(rows) = result {
                inserted += rows;
            }
        }

        Ok(inserted)
    }

    /// 检查成员关系是否存在
    pub async fn is_member_impl(
        &self,
        kind: MembershipKind,
        classroom_id: i64,
        entity_id: i64,
    ) -> Result<bool> {
        let count = match kind {
            MembershipKind::Student => {
                classroom_students::Entity::find()
                    .filter(
                        Condition::all()
                            .add(classroom_students::Column::ClassroomId.eq(classroom_id))
                            .add(classroom_students::Column::StudentId.eq(entity_id)),
                    )
                    .count(&self.db)
                    .await
            }
            MembershipKind::Teacher => {
                classroom_teachers::Entity::find()
                    .filter(
                        Condition::all()
                            .add(classroom_teachers::Column::ClassroomId.eq(classroom_id))
                            .add(classroom_teachers::Column::TeacherId.eq(entity_id)),
                    )
                    .count(&self.db)
                    .await
            }
            MembershipKind::Competence => {
                classroom_competences::Entity::find()
                    .filter(
                        Condition::all()
                            .add(classroom_competences::Column::ClassroomId.eq(classroom_id))
                            .add(classroom_competences::Column::CompetenceId.eq(entity_id)),
                    )
                    .count(&self.db)
                    .await
            }
        }
        .map_err(|e| ClassroomError::database_operation(format!("查询{kind}成员关系失败: {e}")))?;

        Ok(count > 0)
    }

    /// 批量添加学生
    pub async fn add_students_impl(&self, classroom_id: i64, student_ids: &[i64]) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let models = student_ids
            .iter()
            .map(|&student_id| classroom_students::ActiveModel {
                classroom_id: Set(classroom_id),
                student_id: Set(student_id),
                obtained_points: Set(0),
                joined_at: Set(now),
                ..Default::default()
            })
            .collect();

        let on_conflict = OnConflict::columns([
            classroom_students::Column::ClassroomId,
            classroom_students::Column::StudentId,
        ])
        .do_nothing()
        .to_owned();

        self.insert_ignoring_conflicts(models, on_conflict)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("添加学生失败: {e}")))
    }

    /// 批量添加教师
    pub async fn add_teachers_impl(
        &self,
        classroom_id: i64,
        teacher_ids: &[i64],
        role: TeacherRole,
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let models = teacher_ids
            .iter()
            .map(|&teacher_id| classroom_teachers::ActiveModel {
                classroom_id: Set(classroom_id),
                teacher_id: Set(teacher_id),
                role: Set(role.to_string()),
                joined_at: Set(now),
                ..Default::default()
            })
            .collect();

        let on_conflict = OnConflict::columns([
            classroom_teachers::Column::ClassroomId,
            classroom_teachers::Column::TeacherId,
        ])
        .do_nothing()
        .to_owned();

        self.insert_ignoring_conflicts(models, on_conflict)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("添加教师失败: {e}")))
    }

    /// 批量关联能力，初始总分为 0
    pub async fn add_competences_impl(
        &self,
        classroom_id: i64,
        competence_ids: &[i64],
    ) -> Result<u64> {
        let models = competence_ids
            .iter()
            .map(|&competence_id| classroom_competences::ActiveModel {
                classroom_id: Set(classroom_id),
                competence_id: Set(competence_id),
                total_points: Set(0),
                ..Default::default()
            })
            .collect();

        let on_conflict = OnConflict::columns([
            classroom_competences::Column::ClassroomId,
            classroom_competences::Column::CompetenceId,
        ])
        .do_nothing()
        .to_owned();

        self.insert_ignoring_conflicts(models, on_conflict)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("关联能力失败: {e}")))
    }

    /// 列出课堂的教师ID
    pub async fn list_teacher_ids_impl(&self, classroom_id: i64) -> Result<Vec<i64>> {
        classroom_teachers::Entity::find()
            .select_only()
            .column(classroom_teachers::Column::TeacherId)
            .filter(classroom_teachers::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(classroom_teachers::Column::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂教师失败: {e}")))
    }

    /// 列出课堂的学生ID
    pub async fn list_student_ids_impl(&self, classroom_id: i64) -> Result<Vec<i64>> {
        classroom_students::Entity::find()
            .select_only()
            .column(classroom_students::Column::StudentId)
            .filter(classroom_students::Column::ClassroomId.eq(classroom_id))
            .order_by_asc(classroom_students::Column::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂学生失败: {e}")))
    }
}
