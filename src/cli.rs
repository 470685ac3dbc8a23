use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 后台管理接口命令行工具
#[derive(Parser, Debug)]
#[command(name = "admin-cli")]
#[command(version)]
#[command(author = "rpeng252@gmail.com")]
#[command(about = "调用后台管理系统 /api/v1 接口的命令行工具", long_about = None)]
pub struct Cli {
    /// 服务地址，可以带路径前缀
    #[arg(long, global = true, value_name = "URL")]
    #[arg(env = "ADMIN_API_BASE_URL", default_value = admin_api::DEFAULT_BASE_URL)]
    #[arg(value_hint = clap::ValueHint::Url)]
    pub base_url: String,

    /// 完整的 Authorization 头，如 "Bearer xxx"
    #[arg(long, global = true, value_name = "TOKEN")]
    #[arg(env = "ADMIN_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// 请求超时（秒）
    #[arg(long, global = true, value_name = "SECS", default_value_t = 10)]
    pub timeout: u64,

    /// 输出调试日志
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 账号登录，输出令牌
    Login {
        #[arg(long)]
        username: String,

        /// 明文密码，发送前做 MD5
        #[arg(long)]
        password: String,

        #[arg(long, requires = "captcha_code")]
        captcha_id: Option<String>,

        #[arg(long, requires = "captcha_id")]
        captcha_code: Option<String>,
    },

    /// 当前登录用户
    Whoami,

    /// 查询用户列表
    Users {
        #[arg(long, default_value_t = 1)]
        current: u64,

        #[arg(long, default_value_t = 20)]
        page_size: u64,

        /// 按用户名搜索
        #[arg(long, value_name = "KEYWORD")]
        search: Option<String>,
    },

    /// 当前用户的菜单树
    Menus,

    /// 部门树
    DeptTree {
        /// 按名称模糊匹配
        #[arg(long, value_name = "NAME")]
        name: Option<String>,
    },

    /// 系统监控信息
    Monitor,

    /// 从 Swagger 同步接口
    SyncApis,

    /// 上传文件
    Upload {
        #[arg(value_name = "PATH")]
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },

    /// 按表生成代码
    Generate {
        #[arg(value_name = "TABLE")]
        table: String,

        /// 写入目录，不指定时只输出 JSON
        #[arg(long, value_name = "DIR")]
        #[arg(value_hint = clap::ValueHint::DirPath)]
        out: Option<PathBuf>,
    },
}
