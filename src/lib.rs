//! Classroom Service - 课堂管理微服务
//!
//! 基于 Actix Web 构建，负责课堂、教师与学生成员、能力关联，
//! 以及测验提交后的分数累计与排名。
//!
//! # 架构
//! - `aggregation`: 分数聚合（纯计算）
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod aggregation;
pub mod config;
pub mod entity;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
