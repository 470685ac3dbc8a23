//! 系统监控 `/api/v1/monitor`

pub mod models;

use crate::common::client::error::ApiError;
use crate::common::client::transport::{ApiRequest, Transport, api_path, fetch};

use models::MonitorData;

pub async fn get_monitor_data(client: &dyn Transport) -> Result<MonitorData, ApiError> {
    let request = ApiRequest::get(api_path(&["monitor"]));
    fetch(client, request, "获取系统监控信息失败").await
}
