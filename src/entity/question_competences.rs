//! 题目能力关联实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "question_competences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub question_id: i64,
    pub competence_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::competences::Entity",
        from = "Column::CompetenceId",
        to = "super::competences::Column::Id"
    )]
    Competence,
}

impl Related<super::competences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Competence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question_competence(
        self,
    ) -> crate::models::classrooms::entities::QuestionCompetence {
        crate::models::classrooms::entities::QuestionCompetence {
            question_id: self.question_id,
            competence_id: self.competence_id,
        }
    }
}
