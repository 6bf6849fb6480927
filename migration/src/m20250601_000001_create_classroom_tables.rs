use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建课堂表
        manager
            .create_table(
                Table::create()
                    .table(Classrooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Classrooms::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Classrooms::Name).string().not_null())
                    .col(ColumnDef::new(Classrooms::Description).text().null())
                    .col(
                        ColumnDef::new(Classrooms::TotalPoints)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Classrooms::QuizIds).text().not_null())
                    .col(
                        ColumnDef::new(Classrooms::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Classrooms::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建能力表
        manager
            .create_table(
                Table::create()
                    .table(Competences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Competences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Competences::Name).string().not_null())
                    .col(ColumnDef::new(Competences::Description).text().null())
                    .col(
                        ColumnDef::new(Competences::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Competences::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课堂教师关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomTeachers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomTeachers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomTeachers::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomTeachers::TeacherId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ClassroomTeachers::Role).string().not_null())
                    .col(
                        ColumnDef::new(ClassroomTeachers::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomTeachers::Table, ClassroomTeachers::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课堂学生关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomStudents::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomStudents::ObtainedPoints)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ClassroomStudents::JoinedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClassroomStudents::Table, ClassroomStudents::ClassroomId)
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建课堂能力关联表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomCompetences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomCompetences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomCompetences::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomCompetences::CompetenceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomCompetences::TotalPoints)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ClassroomCompetences::Table,
                                ClassroomCompetences::ClassroomId,
                            )
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ClassroomCompetences::Table,
                                ClassroomCompetences::CompetenceId,
                            )
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学生能力得分表
        manager
            .create_table(
                Table::create()
                    .table(ClassroomCompetenceStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClassroomCompetenceStudents::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClassroomCompetenceStudents::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomCompetenceStudents::CompetenceId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomCompetenceStudents::ClassroomId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClassroomCompetenceStudents::ObtainedPoints)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ClassroomCompetenceStudents::Table,
                                ClassroomCompetenceStudents::ClassroomId,
                            )
                            .to(Classrooms::Table, Classrooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                ClassroomCompetenceStudents::Table,
                                ClassroomCompetenceStudents::CompetenceId,
                            )
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建题目能力关联表
        manager
            .create_table(
                Table::create()
                    .table(QuestionCompetences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionCompetences::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(QuestionCompetences::QuestionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(QuestionCompetences::CompetenceId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                QuestionCompetences::Table,
                                QuestionCompetences::CompetenceId,
                            )
                            .to(Competences::Table, Competences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一索引，重复插入依赖这些索引跳过
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("uq_classroom_teachers_classroom_teacher")
                    .table(ClassroomTeachers::Table)
                    .col(ClassroomTeachers::ClassroomId)
                    .col(ClassroomTeachers::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("uq_classroom_students_classroom_student")
                    .table(ClassroomStudents::Table)
                    .col(ClassroomStudents::ClassroomId)
                    .col(ClassroomStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("uq_classroom_competences_classroom_competence")
                    .table(ClassroomCompetences::Table)
                    .col(ClassroomCompetences::ClassroomId)
                    .col(ClassroomCompetences::CompetenceId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("uq_classroom_competence_students_triple")
                    .table(ClassroomCompetenceStudents::Table)
                    .col(ClassroomCompetenceStudents::StudentId)
                    .col(ClassroomCompetenceStudents::CompetenceId)
                    .col(ClassroomCompetenceStudents::ClassroomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("uq_question_competences_question_competence")
                    .table(QuestionCompetences::Table)
                    .col(QuestionCompetences::QuestionId)
                    .col(QuestionCompetences::CompetenceId)
                    .to_owned(),
            )
            .await?;

        // 查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classroom_teachers_teacher_id")
                    .table(ClassroomTeachers::Table)
                    .col(ClassroomTeachers::TeacherId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_classroom_students_student_id")
                    .table(ClassroomStudents::Table)
                    .col(ClassroomStudents::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_competences_teacher_id")
                    .table(Competences::Table)
                    .col(Competences::TeacherId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(QuestionCompetences::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(ClassroomCompetenceStudents::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(ClassroomCompetences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassroomStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClassroomTeachers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Competences::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Classrooms::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classrooms {
    #[sea_orm(iden = "classrooms")]
    Table,
    Id,
    Name,
    Description,
    TotalPoints,
    QuizIds,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Competences {
    #[sea_orm(iden = "competences")]
    Table,
    Id,
    Name,
    Description,
    TeacherId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ClassroomTeachers {
    #[sea_orm(iden = "classroom_teachers")]
    Table,
    Id,
    ClassroomId,
    TeacherId,
    Role,
    JoinedAt,
}

#[derive(DeriveIden)]
enum ClassroomStudents {
    #[sea_orm(iden = "classroom_students")]
    Table,
    Id,
    ClassroomId,
    StudentId,
    ObtainedPoints,
    JoinedAt,
}

#[derive(DeriveIden)]
enum ClassroomCompetences {
    #[sea_orm(iden = "classroom_competences")]
    Table,
    Id,
    ClassroomId,
    CompetenceId,
    TotalPoints,
}

#[derive(DeriveIden)]
enum ClassroomCompetenceStudents {
    #[sea_orm(iden = "classroom_competence_students")]
    Table,
    Id,
    StudentId,
    CompetenceId,
    ClassroomId,
    ObtainedPoints,
}

#[derive(DeriveIden)]
enum QuestionCompetences {
    #[sea_orm(iden = "question_competences")]
    Table,
    Id,
    QuestionId,
    CompetenceId,
}
