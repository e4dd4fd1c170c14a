use std::fmt;

use crate::client::ClientError;

#[derive(Debug, Clone)]
pub enum ShopfrontError {
    Config(String),
    FileOperation(String),
    Serialization(String),
    Terminal(String),
    Catalog(String),
    Validation(String),
}

impl ShopfrontError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShopfrontError::Config(_) => "E001",
            ShopfrontError::FileOperation(_) => "E002",
            ShopfrontError::Serialization(_) => "E003",
            ShopfrontError::Terminal(_) => "E004",
            ShopfrontError::Catalog(_) => "E005",
            ShopfrontError::Validation(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShopfrontError::Config(_) => "Configuration Error",
            ShopfrontError::FileOperation(_) => "File Operation Error",
            ShopfrontError::Serialization(_) => "Serialization Error",
            ShopfrontError::Terminal(_) => "Terminal Error",
            ShopfrontError::Catalog(_) => "Catalog API Error",
            ShopfrontError::Validation(_) => "Validation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShopfrontError::Config(msg) => msg,
            ShopfrontError::FileOperation(msg) => msg,
            ShopfrontError::Serialization(msg) => msg,
            ShopfrontError::Terminal(msg) => msg,
            ShopfrontError::Catalog(msg) => msg,
            ShopfrontError::Validation(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于 CLI 模式）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出（用于 TUI 状态栏）
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShopfrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShopfrontError {}

// 便捷的构造函数
impl ShopfrontError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        ShopfrontError::Config(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShopfrontError::FileOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShopfrontError::Serialization(msg.into())
    }

    pub fn terminal<T: Into<String>>(msg: T) -> Self {
        ShopfrontError::Terminal(msg.into())
    }

    pub fn catalog<T: Into<String>>(msg: T) -> Self {
        ShopfrontError::Catalog(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShopfrontError::Validation(msg.into())
    }
}

impl From<std::io::Error> for ShopfrontError {
    fn from(err: std::io::Error) -> Self {
        ShopfrontError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ShopfrontError {
    fn from(err: serde_json::Error) -> Self {
        ShopfrontError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ShopfrontError {
    fn from(err: toml::ser::Error) -> Self {
        ShopfrontError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ShopfrontError {
    fn from(err: config::ConfigError) -> Self {
        ShopfrontError::Config(err.to_string())
    }
}

impl From<ClientError> for ShopfrontError {
    fn from(err: ClientError) -> Self {
        ShopfrontError::Catalog(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShopfrontError>;
