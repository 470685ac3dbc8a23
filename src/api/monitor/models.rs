use serde::{Deserialize, Serialize};

/// 监控快照
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorData {
    pub history: Option<HistoryData>,
    pub process: Option<ProcessInfo>,
    pub system: Option<SystemInfo>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub cpu: Option<CpuInfo>,
    pub disk: Option<DiskInfo>,
    pub host: Option<HostInfo>,
    pub load: Option<LoadInfo>,
    pub memory: Option<MemoryInfo>,
    pub network: Option<NetworkInfo>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CpuInfo {
    pub logical_cores: Option<u32>,
    pub mhz: Option<f64>,
    pub model_name: Option<String>,
    /// 使用率（%）
    pub percent: Option<f64>,
    pub physical_cores: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiskInfo {
    pub partitions: Option<Vec<PartitionInfo>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionInfo {
    pub free: Option<u64>,
    pub mount_point: Option<String>,
    pub total: Option<u64>,
    pub used_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostInfo {
    pub hostname: Option<String>,
    pub kernel_arch: Option<String>,
    pub kernel_version: Option<String>,
    pub os: Option<String>,
    pub platform: Option<String>,
    pub platform_version: Option<String>,
    /// 运行时间（秒）
    pub uptime: Option<u64>,
}

/// 1/5/15 分钟平均负载
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadInfo {
    pub load1: Option<f64>,
    pub load15: Option<f64>,
    pub load5: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryInfo {
    pub available: Option<u64>,
    pub free: Option<u64>,
    pub total: Option<u64>,
    pub used: Option<u64>,
    pub used_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    pub connection_count: Option<u64>,
    /// 下载速度 (bytes/s)
    pub down_speed: Option<f64>,
    pub interfaces: Option<Vec<NetInterfaceInfo>>,
    /// 上传速度 (bytes/s)
    pub up_speed: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetInterfaceInfo {
    pub bytes_recv: Option<u64>,
    pub bytes_sent: Option<u64>,
    pub name: Option<String>,
}

/// 当前服务进程
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInfo {
    pub cpu: Option<f64>,
    pub go_version: Option<String>,
    pub goroutines: Option<u64>,
    /// 字节
    pub memory: Option<u64>,
    pub memory_percent: Option<f64>,
    pub pid: Option<i64>,
    /// 启动时间戳（毫秒）
    pub start_time: Option<i64>,
    pub threads: Option<u64>,
    /// 运行时长（秒）
    pub uptime: Option<u64>,
    pub working_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryData {
    pub cpu: Option<Vec<HistoryPoint>>,
    /// 1 分钟平均负载
    pub load: Option<Vec<HistoryPoint>>,
    pub memory: Option<Vec<MemoryHistoryPoint>>,
    pub network: Option<Vec<NetworkPoint>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub process_value: Option<f64>,
    pub system_value: Option<f64>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryHistoryPoint {
    pub process_percent: Option<f64>,
    pub process_used: Option<u64>,
    pub system_percent: Option<f64>,
    pub system_used: Option<u64>,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPoint {
    /// 累计值
    pub bytes_recv: Option<u64>,
    pub bytes_sent: Option<u64>,
    pub down_speed: Option<f64>,
    pub timestamp: Option<String>,
    pub up_speed: Option<f64>,
}
