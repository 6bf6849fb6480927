//! 课堂存储操作

use super::SeaOrmStorage;
use crate::entity::classroom_students::{
    Column as StudentColumn, Entity as ClassroomStudents,
};
use crate::entity::classroom_teachers::{
    Column as TeacherColumn, Entity as ClassroomTeachers,
};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms};
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{
    entities::{Classroom, TeacherRole},
    requests::{CreateClassroomRequest, UpdateClassroomRequest},
};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建课堂并以 OWNER 身份加入教师
    pub async fn create_classroom_impl(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            total_points: Set(0),
            quiz_ids: Set("[]".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建课堂失败: {e}")))?;

        self.add_teachers_impl(result.id, &req.teachers, TeacherRole::Owner)
            .await?;

        Ok(result.into_classroom())
    }

    /// 通过 ID 获取课堂
    pub async fn get_classroom_by_id_impl(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂失败: {e}")))?;

        Ok(result.map(|m| m.into_classroom()))
    }

    /// 列出全部课堂
    pub async fn list_classrooms_impl(&self) -> Result<Vec<Classroom>> {
        let classrooms = Classrooms::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂列表失败: {e}")))?;

        Ok(classrooms.into_iter().map(|m| m.into_classroom()).collect())
    }

    /// 列出教师参与的课堂
    pub async fn list_classrooms_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Classroom>> {
        let classroom_ids: Vec<i64> = ClassroomTeachers::find()
            .select_only()
            .column(TeacherColumn::ClassroomId)
            .filter(TeacherColumn::TeacherId.eq(teacher_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("查询教师课堂关联失败: {e}"))
            })?;

        self.list_classrooms_by_ids(classroom_ids).await
    }

    /// 列出学生参与的课堂
    pub async fn list_classrooms_by_student_impl(&self, student_id: i64) -> Result<Vec<Classroom>> {
        let classroom_ids: Vec<i64> = ClassroomStudents::find()
            .select_only()
            .column(StudentColumn::ClassroomId)
            .filter(StudentColumn::StudentId.eq(student_id))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassroomError::database_operation(format!("查询学生课堂关联失败: {e}"))
            })?;

        self.list_classrooms_by_ids(classroom_ids).await
    }

    async fn list_classrooms_by_ids(&self, classroom_ids: Vec<i64>) -> Result<Vec<Classroom>> {
        if classroom_ids.is_empty() {
            return Ok(Vec::new());
        }

        let classrooms = Classrooms::find()
            .filter(Column::Id.is_in(classroom_ids))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂列表失败: {e}")))?;

        Ok(classrooms.into_iter().map(|m| m.into_classroom()).collect())
    }

    /// 更新课堂名称和描述
    pub async fn update_classroom_impl(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        let existing = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新课堂失败: {e}")))?;

        Ok(Some(result.into_classroom()))
    }

    /// 覆盖测验列表，points 非零时在同一条语句中累加总分
    pub async fn set_classroom_quiz_ids_impl(
        &self,
        classroom_id: i64,
        quiz_ids: &[i64],
        points: i64,
    ) -> Result<Option<Classroom>> {
        let quiz_ids = serde_json::to_string(quiz_ids)?;

        let mut update = Classrooms::update_many()
            .col_expr(Column::QuizIds, Expr::value(quiz_ids))
            .col_expr(
                Column::UpdatedAt,
                Expr::value(chrono::Utc::now().timestamp()),
            );

        if points != 0 {
            update = update.col_expr(Column::TotalPoints, Expr::col(Column::TotalPoints).add(points));
        }

        let result = update
            .filter(Column::Id.eq(classroom_id))
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新课堂测验失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_classroom_by_id_impl(classroom_id).await
    }
}
