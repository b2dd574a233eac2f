//! BugStore - 客户 / 商品 / 订单 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Customer Context: 客户资料校验
//! - Product Context: 商品信息与价格
//! - Order Context: 下单、订单行金额快照
//!
//! 应用层 (application/):
//! - Ports: 仓储端口定义
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (/v1)
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
