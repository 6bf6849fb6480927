use serde::Deserialize;
use serde_json::Value;

use crate::models::classrooms::entities::TeacherRole;

// 创建课堂请求，teachers 中的教师均以 OWNER 身份加入
#[derive(Debug, Deserialize)]
pub struct CreateClassroomRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub teachers: Vec<i64>,
}

// 更新课堂请求
#[derive(Debug, Deserialize)]
pub struct UpdateClassroomRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

// 批量添加学生，元素可能不合法，由服务层过滤
#[derive(Debug, Deserialize)]
pub struct AddStudentsRequest {
    pub students_id: Option<Vec<Value>>,
}

// 批量添加教师
#[derive(Debug, Deserialize)]
pub struct AddTeachersRequest {
    pub teachers_id: Option<Vec<Value>>,
    pub role: Option<TeacherRole>,
}

// 批量关联能力
#[derive(Debug, Deserialize)]
pub struct AssociateCompetencesRequest {
    pub competences_id: Option<Vec<Value>>,
}

// 测验中的单个题目
#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestionInput {
    pub question_id: i64,
    pub points: i64,
    #[serde(default)]
    pub competences_id: Vec<i64>,
}

// 将测验挂到课堂并累计能力总分
#[derive(Debug, Clone, Deserialize)]
pub struct AttachQuizRequest {
    pub quiz_id: i64,
    pub total_points: Option<i64>,
    pub questions: Vec<QuizQuestionInput>,
}

// 单个测验 ID 或 ID 列表
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizIdList {
    Many(Vec<Value>),
    One(Value),
}

impl QuizIdList {
    pub fn into_values(self) -> Vec<Value> {
        match self {
            QuizIdList::Many(values) => values,
            QuizIdList::One(value) => vec![value],
        }
    }
}

// 从课堂移除测验
#[derive(Debug, Deserialize)]
pub struct RemoveQuizzesRequest {
    pub quiz_id: Option<QuizIdList>,
}

// 学生单题得分
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionResultInput {
    pub question_id: i64,
    pub obtained_points: i64,
}

// 记录学生一次测验作答的得分
#[derive(Debug, Clone, Deserialize)]
pub struct StudentQuizPointsRequest {
    pub quiz_id: i64,
    pub student_id: i64,
    pub obtained_points: i64,
    #[serde(default)]
    pub question_student: Vec<QuestionResultInput>,
}
