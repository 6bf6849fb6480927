//! 分数累计与排名存储操作
//!
//! 所有累加都写成 `col = col + delta` 的单条语句，并发的增量可以叠加。

use super::SeaOrmStorage;
use crate::entity::{
    classroom_competence_students, classroom_competences, classroom_students,
    question_competences,
};
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::entities::{QuestionCompetence, StudentPoints};
use sea_orm::sea_query::{Expr, ExprTrait, OnConflict};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 记录题目与能力的关联
    pub async fn add_question_competences_impl(&self, pairs: &[QuestionCompetence]) -> Result<u64> {
        let models = pairs
            .iter()
            .map(|pair| question_competences::ActiveModel {
                question_id: Set(pair.question_id),
                competence_id: Set(pair.competence_id),
                ..Default::default()
            })
            .collect();

        let on_conflict = OnConflict::columns([
            question_competences::Column::QuestionId,
            question_competences::Column::CompetenceId,
        ])
        .do_nothing()
        .to_owned();

        self.insert_ignoring_conflicts(models, on_conflict)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("记录题目能力关联失败: {e}")))
    }

    /// 查询题目关联的能力
    pub async fn find_question_competences_impl(
        &self,
        question_ids: &[i64],
    ) -> Result<Vec<QuestionCompetence>> {
        if question_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = question_competences::Entity::find()
            .filter(question_competences::Column::QuestionId.is_in(question_ids.iter().copied()))
            .order_by_asc(question_competences::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询题目能力关联失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|m| m.into_question_competence())
            .collect())
    }

    /// 累加课堂能力总分
    pub async fn increment_classroom_competence_points_impl(
        &self,
        classroom_id: i64,
        competence_id: i64,
        points: i64,
    ) -> Result<()> {
        use classroom_competences::{ActiveModel, Column, Entity};

        let model = ActiveModel {
            classroom_id: Set(classroom_id),
            competence_id: Set(competence_id),
            total_points: Set(points),
            ..Default::default()
        };

        let on_conflict = OnConflict::columns([Column::ClassroomId, Column::CompetenceId])
            .value(
                Column::TotalPoints,
                Expr::col((Entity, Column::TotalPoints)).add(points),
            )
            .to_owned();

        Entity::insert(model)
            .on_conflict(on_conflict)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("累加课堂能力总分失败: {e}")))?;

        Ok(())
    }

    /// 累加学生在课堂中的得分
    pub async fn increment_student_points_impl(
        &self,
        classroom_id: i64,
        student_id: i64,
        points: i64,
    ) -> Result<bool> {
        use classroom_students::{Column, Entity};

        let result = Entity::update_many()
            .col_expr(
                Column::ObtainedPoints,
                Expr::col(Column::ObtainedPoints).add(points),
            )
            .filter(
                Condition::all()
                    .add(Column::ClassroomId.eq(classroom_id))
                    .add(Column::StudentId.eq(student_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("累加学生得分失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 累加学生在课堂某能力上的得分
    pub async fn increment_student_competence_points_impl(
        &self,
        classroom_id: i64,
        student_id: i64,
        competence_id: i64,
        points: i64,
    ) -> Result<()> {
        use classroom_competence_students::{ActiveModel, Column, Entity};

        let model = ActiveModel {
            student_id: Set(student_id),
            competence_id: Set(competence_id),
            classroom_id: Set(classroom_id),
            obtained_points: Set(points),
            ..Default::default()
        };

        let on_conflict = OnConflict::columns([
            Column::StudentId,
            Column::CompetenceId,
            Column::ClassroomId,
        ])
        .value(
            Column::ObtainedPoints,
            Expr::col((Entity, Column::ObtainedPoints)).add(points),
        )
        .to_owned();

        Entity::insert(model)
            .on_conflict(on_conflict)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("累加学生能力得分失败: {e}")))?;

        Ok(())
    }

    /// 课堂学生得分，按得分降序，同分按加入顺序
    pub async fn list_student_points_impl(&self, classroom_id: i64) -> Result<Vec<StudentPoints>> {
        use classroom_students::{Column, Entity};

        let rows = Entity::find()
            .filter(Column::ClassroomId.eq(classroom_id))
            .order_by_desc(Column::ObtainedPoints)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询学生得分失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_student_points()).collect())
    }

    /// 课堂某能力上的学生得分
    pub async fn list_student_competence_points_impl(
        &self,
        classroom_id: i64,
        competence_id: i64,
    ) -> Result<Vec<StudentPoints>> {
        use classroom_competence_students::{Column, Entity};

        let rows = Entity::find()
            .filter(
                Condition::all()
                    .add(Column::ClassroomId.eq(classroom_id))
                    .add(Column::CompetenceId.eq(competence_id)),
            )
            .order_by_desc(Column::ObtainedPoints)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("查询学生能力得分失败: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_student_points()).collect())
    }
}
