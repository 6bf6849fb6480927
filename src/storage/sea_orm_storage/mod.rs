//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classrooms;
mod competences;
mod memberships;
mod scores;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{ClassroomError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（文件数据库启用 WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassroomError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5));

        let pool_options = if Self::is_in_memory(url) {
            // 内存数据库随最后一个连接关闭而消失
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("mmap_size", "536870912")
                .pragma("wal_autocheckpoint", "1000");

            SqlitePoolOptions::new()
                .max_connections(config.pool_size)
                .min_connections(1)
                .test_before_acquire(true)
                .idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .acquire_timeout(Duration::from_secs(config.timeout))
            .connect_with(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("无法连接到数据库: {e}")))
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassroomError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    classrooms::{
        entities::{Classroom, MembershipKind, QuestionCompetence, StudentPoints, TeacherRole},
        requests::{CreateClassroomRequest, UpdateClassroomRequest},
    },
    competences::{
        entities::{ClassroomCompetence, Competence},
        requests::CreateCompetenceRequest,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 课堂模块
    async fn create_classroom(&self, classroom: CreateClassroomRequest) -> Result<Classroom> {
        self.create_classroom_impl(classroom).await
    }

    async fn get_classroom_by_id(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        self.get_classroom_by_id_impl(classroom_id).await
    }

    async fn list_classrooms(&self) -> Result<Vec<Classroom>> {
        self.list_classrooms_impl().await
    }

    async fn list_classrooms_by_teacher(&self, teacher_id: i64) -> Result<Vec<Classroom>> {
        self.list_classrooms_by_teacher_impl(teacher_id).await
    }

    async fn list_classrooms_by_student(&self, student_id: i64) -> Result<Vec<Classroom>> {
        self.list_classrooms_by_student_impl(student_id).await
    }

    async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        self.update_classroom_impl(classroom_id, update).await
    }

    async fn set_classroom_quiz_ids(
        &self,
        classroom_id: i64,
        quiz_ids: &[i64],
    ) -> Result<Option<Classroom>> {
        self.set_classroom_quiz_ids_impl(classroom_id, quiz_ids, 0)
            .await
    }

    async fn set_quiz_ids_and_add_points(
        &self,
        classroom_id: i64,
        quiz_ids: &[i64],
        points: i64,
    ) -> Result<Option<Classroom>> {
        self.set_classroom_quiz_ids_impl(classroom_id, quiz_ids, points)
            .await
    }

    // 成员模块
    async fn is_member(
        &self,
        kind: MembershipKind,
        classroom_id: i64,
        entity_id: i64,
    ) -> Result<bool> {
        self.is_member_impl(kind, classroom_id, entity_id).await
    }

    async fn add_students(&self, classroom_id: i64, student_ids: &[i64]) -> Result<u64> {
        self.add_students_impl(classroom_id, student_ids).await
    }

    async fn add_teachers(
        &self,
        classroom_id: i64,
        teacher_ids: &[i64],
        role: TeacherRole,
    ) -> Result<u64> {
        self.add_teachers_impl(classroom_id, teacher_ids, role)
            .await
    }

    async fn add_competences(&self, classroom_id: i64, competence_ids: &[i64]) -> Result<u64> {
        self.add_competences_impl(classroom_id, competence_ids)
            .await
    }

    async fn list_teacher_ids(&self, classroom_id: i64) -> Result<Vec<i64>> {
        self.list_teacher_ids_impl(classroom_id).await
    }

    async fn list_student_ids(&self, classroom_id: i64) -> Result<Vec<i64>> {
        self.list_student_ids_impl(classroom_id).await
    }

    // 能力模块
    async fn create_competence(&self, competence: CreateCompetenceRequest) -> Result<Competence> {
        self.create_competence_impl(competence).await
    }

    async fn get_competence_by_id(&self, competence_id: i64) -> Result<Option<Competence>> {
        self.get_competence_by_id_impl(competence_id).await
    }

    async fn list_competences(&self) -> Result<Vec<Competence>> {
        self.list_competences_impl().await
    }

    async fn list_competences_by_teacher(&self, teacher_id: i64) -> Result<Vec<Competence>> {
        self.list_competences_by_teacher_impl(teacher_id).await
    }

    async fn list_classroom_competences(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<ClassroomCompetence>> {
        self.list_classroom_competences_impl(classroom_id).await
    }

    async fn find_competences_by_ids(&self, competence_ids: &[i64]) -> Result<Vec<Competence>> {
        self.find_competences_by_ids_impl(competence_ids).await
    }

    // 分数模块
    async fn add_question_competences(&self, pairs: &[QuestionCompetence]) -> Result<u64> {
        self.add_question_competences_impl(pairs).await
    }

    async fn find_question_competences(
        &self,
        question_ids: &[i64],
    ) -> Result<Vec<QuestionCompetence>> {
        self.find_question_competences_impl(question_ids).await
    }

    async fn increment_classroom_competence_points(
        &self,
        classroom_id: i64,
        competence_id: i64,
        points: i64,
    ) -> Result<()> {
        self.increment_classroom_competence_points_impl(classroom_id, competence_id, points)
            .await
    }

    async fn increment_student_points(
        &self,
        classroom_id: i64,
        student_id: i64,
        points: i64,
    ) -> Result<bool> {
        self.increment_student_points_impl(classroom_id, student_id, points)
            .await
    }

    async fn increment_student_competence_points(
        &self,
        classroom_id: i64,
        student_id: i64,
        competence_id: i64,
        points: i64,
    ) -> Result<()> {
        self.increment_student_competence_points_impl(
            classroom_id,
            student_id,
            competence_id,
            points,
        )
        .await
    }

    // 排名模块
    async fn list_student_points(&self, classroom_id: i64) -> Result<Vec<StudentPoints>> {
        self.list_student_points_impl(classroom_id).await
    }

    async fn list_student_competence_points(
        &self,
        classroom_id: i64,
        competence_id: i64,
    ) -> Result<Vec<StudentPoints>> {
        self.list_student_competence_points_impl(classroom_id, competence_id)
            .await
    }

    async fn close(&self) -> Result<()> {
        self.db
            .clone()
            .close()
            .await
            .map_err(|e| ClassroomError::database_connection(format!("关闭数据库连接失败: {e}")))
    }
}
