//! `/api/v1/*` 各资源的接口封装
//!
//! 每个子模块对应一组资源：`models` 下是与服务端 JSON 对应的数据结构，
//! 模块根下是接口函数。所有函数都接收 `&dyn Transport`，成功时返回 `data`，
//! 失败时返回携带服务端消息的 [`ApiError`](crate::common::client::error::ApiError)。

pub mod captcha;
pub mod codegen;
pub mod common;
pub mod current;
pub mod departments;
pub mod dict_items;
pub mod dicts;
pub mod files;
pub mod loggers;
pub mod login;
pub mod menus;
pub mod monitor;
pub mod options;
pub mod roles;
pub mod social;
pub mod storages;
pub mod sys_api;
pub mod users;
