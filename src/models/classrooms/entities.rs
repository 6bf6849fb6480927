use serde::{Deserialize, Serialize};

use crate::models::competences::entities::CompetenceSummary;

// 课堂教师角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeacherRole {
    Owner,  // 创建者
    Editor, // 协作教师
}

impl TeacherRole {
    pub const OWNER: &'static str = "OWNER";
    pub const EDITOR: &'static str = "EDITOR";
}

impl<'de> Deserialize<'de> for TeacherRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<TeacherRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "Invalid teacher role: '{s}'. Supported roles: OWNER, EDITOR"
            ))
        })
    }
}

impl std::fmt::Display for TeacherRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeacherRole::Owner => write!(f, "{}", Self::OWNER),
            TeacherRole::Editor => write!(f, "{}", Self::EDITOR),
        }
    }
}

impl std::str::FromStr for TeacherRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            Self::OWNER => Ok(TeacherRole::Owner),
            Self::EDITOR => Ok(TeacherRole::Editor),
            _ => Err(format!("Invalid teacher role: {s}")),
        }
    }
}

/// 课堂成员关系的种类，用于统一的存在性检查
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipKind {
    Student,
    Teacher,
    Competence,
}

impl std::fmt::Display for MembershipKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipKind::Student => write!(f, "student"),
            MembershipKind::Teacher => write!(f, "teacher"),
            MembershipKind::Competence => write!(f, "competence"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Classroom {
    // 课堂ID
    pub id: i64,
    // 课堂名称
    pub name: String,
    // 课堂描述
    pub description: Option<String>,
    // 累计总分
    pub total_points: i64,
    // 已关联的测验 ID（集合语义，保持加入顺序）
    pub quiz_ids: Vec<i64>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课堂基础信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassroomSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Classroom> for ClassroomSummary {
    fn from(classroom: Classroom) -> Self {
        Self {
            id: classroom.id,
            name: classroom.name,
            description: classroom.description,
        }
    }
}

// 课堂详情（包含能力与测验）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub total_points: i64,
    pub quiz_ids: Vec<i64>,
    pub competences: Vec<CompetenceSummary>,
}

// 学生得分，用于排名
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentPoints {
    pub student_id: i64,
    pub obtained_points: i64,
}

// 题目与能力的关联
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionCompetence {
    pub question_id: i64,
    pub competence_id: i64,
}
