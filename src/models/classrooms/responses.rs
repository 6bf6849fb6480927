use serde::{Deserialize, Serialize};

use crate::models::classrooms::entities::ClassroomSummary;

// 批量写入的影响行数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherIdsResponse {
    pub teachers_id: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentIdsResponse {
    pub students_id: Vec<i64>,
}

// 用户参与的课堂，按身份分组
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClassroomsResponse {
    pub as_teacher: Vec<ClassroomSummary>,
    pub as_student: Vec<ClassroomSummary>,
}

// 单个能力的分数增量
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompetencePoints {
    pub competence_id: i64,
    pub points: i64,
}

// 测验挂载结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttachmentResponse {
    pub classroom_id: i64,
    pub quiz_id: i64,
    pub quiz_ids: Vec<i64>,
    pub total_points: i64,
    pub associations_created: u64,
    pub competence_points: Vec<CompetencePoints>,
}

// 学生测验得分记录结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentQuizPointsResponse {
    pub classroom_id: i64,
    pub student_id: i64,
    pub quiz_id: i64,
    pub points_added: i64,
    pub competence_points: Vec<CompetencePoints>,
}

// 排行榜条目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankingEntry {
    pub rank: u32,
    pub student_id: i64,
    pub obtained_points: i64,
}
