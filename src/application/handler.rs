//! 请求处理器抽象
//!
//! 每个命令/查询对应一个实现了 `RequestHandler` 的具体处理器，
//! 在启动时由 `AppState` 组装，HTTP 层直接调用。

use async_trait::async_trait;

use crate::application::error::ApplicationError;

/// 单个用例的处理器
#[async_trait]
pub trait RequestHandler<R>: Send + Sync
where
    R: Send + 'static,
{
    type Response: Send;

    async fn handle(&self, request: R) -> Result<Self::Response, ApplicationError>;
}
