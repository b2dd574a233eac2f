//! 请求提取器
//!
//! 包装 axum 的 `Json` / `Path`，把提取失败统一转换为 400 + `{"error": msg}`。

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use super::error::ApiError;

/// JSON 请求体
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// 路径参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
