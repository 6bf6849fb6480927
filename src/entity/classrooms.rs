//! 课堂实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classrooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub total_points: i64,
    // JSON 数组文本
    pub quiz_ids: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::classroom_teachers::Entity")]
    ClassroomTeachers,
    #[sea_orm(has_many = "super::classroom_students::Entity")]
    ClassroomStudents,
    #[sea_orm(has_many = "super::classroom_competences::Entity")]
    ClassroomCompetences,
}

impl Related<super::classroom_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomTeachers.def()
    }
}

impl Related<super::classroom_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomStudents.def()
    }
}

impl Related<super::classroom_competences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomCompetences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 解析存储的测验 ID 列表，损坏的数据视为空列表
pub fn parse_quiz_ids(raw: &str) -> Vec<i64> {
    serde_json::from_str(raw).unwrap_or_default()
}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_classroom(self) -> crate::models::classrooms::entities::Classroom {
        use crate::models::classrooms::entities::Classroom;
        use chrono::{DateTime, Utc};

        Classroom {
            id: self.id,
            quiz_ids: parse_quiz_ids(&self.quiz_ids),
            name: self.name,
            description: self.description,
            total_points: self.total_points,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quiz_ids() {
        assert_eq!(parse_quiz_ids("[3,1,2]"), vec![3, 1, 2]);
        assert_eq!(parse_quiz_ids("[]"), Vec::<i64>::new());
        assert_eq!(parse_quiz_ids("not json"), Vec::<i64>::new());
    }
}
