use thiserror::Error;

/// 命令行参数错误
///
/// 写到标准错误的内容由 [`crate::cli::report_error`] 决定，`MissingArguments`
/// 只输出用法，`InvalidLength` 原样输出参数字节。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChexdiffError {
    /// 没有任何参数，只输出用法
    #[error("missing arguments")]
    MissingArguments,

    #[error("error: wrong number of args, need two: 1st and 2nd hex string")]
    WrongArgumentCount { count: usize },

    #[error("error: '{}' has invalid length", String::from_utf8_lossy(arg))]
    InvalidLength { arg: Vec<u8> },
}

impl ChexdiffError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, ChexdiffError>;
