use colored::*;

/// 命令行的彩色输出
///
/// 提示信息走 stderr，stdout 只留给 JSON 和树形结果。
pub struct PrettyLogger;

impl PrettyLogger {
    pub fn success(message: impl AsRef<str>) {
        eprintln!("{} {}", "✓".green().bold(), message.as_ref());
    }

    pub fn info(message: impl AsRef<str>) {
        eprintln!("{} {}", "ℹ".blue().bold(), message.as_ref());
    }

    pub fn warning(message: impl AsRef<str>) {
        eprintln!("{} {}", "⚠".yellow().bold(), message.as_ref());
    }

    pub fn error(message: impl AsRef<str>) {
        eprintln!("{} {}", "✗".red().bold(), message.as_ref());
    }

    pub fn step_start(step: impl AsRef<str>) {
        eprintln!("{} {}", "▶".cyan().bold(), step.as_ref().bold());
    }

    /// 树形结构中的一行，按层级缩进
    pub fn tree_node(depth: usize, title: impl AsRef<str>, detail: impl AsRef<str>) {
        let indent = "  ".repeat(depth);
        let marker = if depth == 0 { "■" } else { "└" };
        let detail = detail.as_ref();
        if detail.is_empty() {
            println!("{}{} {}", indent, marker.bright_black(), title.as_ref().bold());
        } else {
            println!(
                "{}{} {} {}",
                indent,
                marker.bright_black(),
                title.as_ref().bold(),
                detail.bright_black()
            );
        }
    }

    pub fn file_info(label: impl AsRef<str>, path: impl AsRef<str>) {
        eprintln!("{} {}: {}", "📁".blue().bold(), label.as_ref().bold(), path.as_ref());
    }
}

#[macro_export]
macro_rules! log_success {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::success(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::info(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::warning(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::error(format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_step {
    ($($arg:tt)*) => {
        $crate::common::logger::PrettyLogger::step_start(format!($($arg)*))
    };
}
