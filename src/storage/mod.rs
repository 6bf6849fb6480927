use std::sync::Arc;

use crate::models::{
    classrooms::{
        entities::{Classroom, MembershipKind, QuestionCompetence, StudentPoints, TeacherRole},
        requests::{CreateClassroomRequest, UpdateClassroomRequest},
    },
    competences::{
        entities::{ClassroomCompetence, Competence},
        requests::CreateCompetenceRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课堂管理方法
    // 创建课堂，teachers 以 OWNER 身份加入
    async fn create_classroom(&self, classroom: CreateClassroomRequest) -> Result<Classroom>;
    // 通过ID获取课堂
    async fn get_classroom_by_id(&self, classroom_id: i64) -> Result<Option<Classroom>>;
    // 列出全部课堂
    async fn list_classrooms(&self) -> Result<Vec<Classroom>>;
    // 列出教师参与的课堂
    async fn list_classrooms_by_teacher(&self, teacher_id: i64) -> Result<Vec<Classroom>>;
    // 列出学生参与的课堂
    async fn list_classrooms_by_student(&self, student_id: i64) -> Result<Vec<Classroom>>;
    // 更新课堂名称和描述
    async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>>;
    // 覆盖课堂的测验列表
    async fn set_classroom_quiz_ids(
        &self,
        classroom_id: i64,
        quiz_ids: &[i64],
    ) -> Result<Option<Classroom>>;
    // 覆盖课堂的测验列表并累加总分
    async fn set_quiz_ids_and_add_points(
        &self,
        classroom_id: i64,
        quiz_ids: &[i64],
        points: i64,
    ) -> Result<Option<Classroom>>;

    /// 课堂成员管理方法
    // 检查成员关系是否存在
    async fn is_member(
        &self,
        kind: MembershipKind,
        classroom_id: i64,
        entity_id: i64,
    ) -> Result<bool>;
    // 批量添加学生，已存在的跳过，返回新增数量
    async fn add_students(&self, classroom_id: i64, student_ids: &[i64]) -> Result<u64>;
    // 批量添加教师
    async fn add_teachers(
        &self,
        classroom_id: i64,
        teacher_ids: &[i64],
        role: TeacherRole,
    ) -> Result<u64>;
    // 批量关联能力，总分为 0
    async fn add_competences(&self, classroom_id: i64, competence_ids: &[i64]) -> Result<u64>;
    // 列出课堂的教师ID
    async fn list_teacher_ids(&self, classroom_id: i64) -> Result<Vec<i64>>;
    // 列出课堂的学生ID
    async fn list_student_ids(&self, classroom_id: i64) -> Result<Vec<i64>>;

    /// 能力管理方法
    async fn create_competence(&self, competence: CreateCompetenceRequest) -> Result<Competence>;
    async fn get_competence_by_id(&self, competence_id: i64) -> Result<Option<Competence>>;
    async fn list_competences(&self) -> Result<Vec<Competence>>;
    async fn list_competences_by_teacher(&self, teacher_id: i64) -> Result<Vec<Competence>>;
    // 课堂关联的能力及总分
    async fn list_classroom_competences(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<ClassroomCompetence>>;
    // 按ID批量查找，不存在的ID不会出现在结果中
    async fn find_competences_by_ids(&self, competence_ids: &[i64]) -> Result<Vec<Competence>>;

    /// 分数累计方法
    // 记录题目与能力的关联，已存在的跳过
    async fn add_question_competences(&self, pairs: &[QuestionCompetence]) -> Result<u64>;
    // 查询题目关联的能力
    async fn find_question_competences(
        &self,
        question_ids: &[i64],
    ) -> Result<Vec<QuestionCompetence>>;
    // 累加课堂能力总分，不存在时创建
    async fn increment_classroom_competence_points(
        &self,
        classroom_id: i64,
        competence_id: i64,
        points: i64,
    ) -> Result<()>;
    // 累加学生在课堂中的得分，返回成员记录是否存在
    async fn increment_student_points(
        &self,
        classroom_id: i64,
        student_id: i64,
        points: i64,
    ) -> Result<bool>;
    // 累加学生在课堂某能力上的得分，不存在时创建
    async fn increment_student_competence_points(
        &self,
        classroom_id: i64,
        student_id: i64,
        competence_id: i64,
        points: i64,
    ) -> Result<()>;

    /// 排名查询方法
    // 按得分降序，同分按加入顺序
    async fn list_student_points(&self, classroom_id: i64) -> Result<Vec<StudentPoints>>;
    async fn list_student_competence_points(
        &self,
        classroom_id: i64,
        competence_id: i64,
    ) -> Result<Vec<StudentPoints>>;

    // 关闭连接池
    async fn close(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
