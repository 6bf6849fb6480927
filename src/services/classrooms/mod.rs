pub mod competences;
pub mod create;
pub mod get;
pub mod members;
pub mod quizzes;
pub mod ranking;
pub mod scoring;
pub mod update;

use serde_json::Value;
use std::sync::Arc;

use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{
    entities::{Classroom, ClassroomDetail, ClassroomSummary, TeacherRole},
    requests::{
        AttachQuizRequest, CreateClassroomRequest, StudentQuizPointsRequest,
        UpdateClassroomRequest,
    },
    responses::{
        QuizAttachmentResponse, RankingEntry, StudentIdsResponse, StudentQuizPointsResponse,
        TeacherIdsResponse, UserClassroomsResponse,
    },
};
use crate::models::competences::entities::ClassroomCompetence;
use crate::storage::Storage;

pub struct ClassroomService {
    storage: Arc<dyn Storage>,
}

impl ClassroomService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 获取课堂，不存在时返回 ClassroomNotFound
    pub(crate) async fn require_classroom(&self, classroom_id: i64) -> Result<Classroom> {
        self.storage
            .get_classroom_by_id(classroom_id)
            .await?
            .ok_or_else(|| {
                ClassroomError::classroom_not_found(format!("Classroom {classroom_id} not found"))
            })
    }

    // 创建课堂
    pub async fn create_classroom(&self, req: CreateClassroomRequest) -> Result<Classroom> {
        create::create_classroom(self, req).await
    }

    // 列出全部课堂
    pub async fn list_classrooms(&self) -> Result<Vec<Classroom>> {
        get::list_classrooms(self).await
    }

    // 课堂详情，包含能力与测验
    pub async fn get_classroom(&self, classroom_id: i64) -> Result<ClassroomDetail> {
        get::get_classroom(self, classroom_id).await
    }

    pub async fn list_classrooms_by_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<ClassroomSummary>> {
        get::list_classrooms_by_teacher(self, teacher_id).await
    }

    // 用户以教师或学生身份参与的课堂
    pub async fn list_classrooms_by_user(&self, user_id: i64) -> Result<UserClassroomsResponse> {
        get::list_classrooms_by_user(self, user_id).await
    }

    // 更新课堂名称和描述
    pub async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Classroom> {
        update::update_classroom(self, classroom_id, update).await
    }

    // 批量添加学生
    pub async fn add_students(&self, classroom_id: i64, ids: Option<Vec<Value>>) -> Result<u64> {
        members::add_students(self, classroom_id, ids).await
    }

    // 批量添加教师，默认 EDITOR
    pub async fn add_teachers(
        &self,
        classroom_id: i64,
        ids: Option<Vec<Value>>,
        role: Option<TeacherRole>,
    ) -> Result<u64> {
        members::add_teachers(self, classroom_id, ids, role).await
    }

    pub async fn list_teacher_ids(&self, classroom_id: i64) -> Result<TeacherIdsResponse> {
        members::list_teacher_ids(self, classroom_id).await
    }

    pub async fn list_student_ids(&self, classroom_id: i64) -> Result<StudentIdsResponse> {
        members::list_student_ids(self, classroom_id).await
    }

    // 课堂关联的能力
    pub async fn list_classroom_competences(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<ClassroomCompetence>> {
        competences::list_classroom_competences(self, classroom_id).await
    }

    // 批量关联能力
    pub async fn associate_competences(
        &self,
        classroom_id: i64,
        ids: Option<Vec<Value>>,
    ) -> Result<u64> {
        competences::associate_competences(self, classroom_id, ids).await
    }

    // 挂载测验并累计能力总分
    pub async fn attach_quiz(
        &self,
        classroom_id: i64,
        quiz: AttachQuizRequest,
    ) -> Result<QuizAttachmentResponse> {
        quizzes::attach_quiz(self, classroom_id, quiz).await
    }

    // 移除测验
    pub async fn remove_quizzes(&self, classroom_id: i64, quiz_ids: Vec<Value>) -> Result<Classroom> {
        quizzes::remove_quizzes(self, classroom_id, quiz_ids).await
    }

    // 记录学生测验得分
    pub async fn record_student_quiz_points(
        &self,
        classroom_id: i64,
        attempt: StudentQuizPointsRequest,
    ) -> Result<StudentQuizPointsResponse> {
        scoring::record_student_quiz_points(self, classroom_id, attempt).await
    }

    // 学生排行榜
    pub async fn student_ranking(&self, classroom_id: i64) -> Result<Vec<RankingEntry>> {
        ranking::student_ranking(self, classroom_id).await
    }

    // 某能力的学生排行榜
    pub async fn student_competence_ranking(
        &self,
        classroom_id: i64,
        competence_id: i64,
    ) -> Result<Vec<RankingEntry>> {
        ranking::student_competence_ranking(self, classroom_id, competence_id).await
    }
}
