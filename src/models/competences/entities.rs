use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Competence {
    // 能力ID
    pub id: i64,
    // 能力名称
    pub name: String,
    // 能力描述
    pub description: Option<String>,
    // 创建该能力的教师
    pub id_teacher: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 能力基础信息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetenceSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Competence> for CompetenceSummary {
    fn from(competence: Competence) -> Self {
        Self {
            id: competence.id,
            name: competence.name,
            description: competence.description,
        }
    }
}

// 课堂中的能力及其可获得的总分
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassroomCompetence {
    pub id_competence: i64,
    pub name: String,
    pub description: Option<String>,
    pub total_points: i64,
}

impl From<ClassroomCompetence> for CompetenceSummary {
    fn from(competence: ClassroomCompetence) -> Self {
        Self {
            id: competence.id_competence,
            name: competence.name,
            description: competence.description,
        }
    }
}
