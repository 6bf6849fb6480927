//! 学生在课堂中各能力的得分实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classroom_competence_students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub competence_id: i64,
    pub classroom_id: i64,
    pub obtained_points: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classrooms::Entity",
        from = "Column::ClassroomId",
        to = "super::classrooms::Column::Id"
    )]
    Classroom,
    #[sea_orm(
        belongs_to = "super::competences::Entity",
        from = "Column::CompetenceId",
        to = "super::competences::Column::Id"
    )]
    Competence,
}

impl Related<super::classrooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classroom.def()
    }
}

impl Related<super::competences::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Competence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_student_points(self) -> crate::models::classrooms::entities::StudentPoints {
        crate::models::classrooms::entities::StudentPoints {
            student_id: self.student_id,
            obtained_points: self.obtained_points,
        }
    }
}
