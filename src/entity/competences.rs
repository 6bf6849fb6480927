//! 能力实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "competences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub teacher_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::classroom_competences::Entity")]
    ClassroomCompetences,
    #[sea_orm(has_many = "super::question_competences::Entity")]
    QuestionCompetences,
}

impl Related<super::classroom_competences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassroomCompetences.def()
    }
}

impl Related<super::question_competences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionCompetences.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_competence(self) -> crate::models::competences::entities::Competence {
        use crate::models::competences::entities::Competence;
        use chrono::{DateTime, Utc};

        Competence {
            id: self.id,
            name: self.name,
            description: self.description,
            id_teacher: self.teacher_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
