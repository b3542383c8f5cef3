use clap::Parser;
use log::debug;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};

use crate::error::{ChexdiffError, Result};
use crate::hexdiff::HexView;

pub const VERSION: &str = "0.1";

pub const USAGE: &str = "usage: chexdiff [options] hex1 hex2\n\
\n\
Compare the two hex strings and print their differences.\n\
\n\
options:\n    \
    -h/--help    print this message\n    \
    -v           print version\n";

/// 对比两个十六进制字符串，标出不同的字节
///
/// 选项只在第一个参数位置按前缀识别，因此 clap 自带的帮助与版本选项被关闭，
/// 所有参数原样收集后由 [`Cli::action`] 处理。应通过 [`Cli::from_args`] 构造。
#[derive(Parser, Debug)]
#[command(name = "chexdiff")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// [options] hex1 hex2
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// 解析后要执行的操作
#[derive(Debug, PartialEq, Eq)]
pub enum Action<'a> {
    Help,
    Version,
    Compare {
        first: HexView<'a>,
        second: HexView<'a>,
    },
}

fn has_prefix(arg: &OsStr, prefix: &str) -> bool {
    arg.as_encoded_bytes().starts_with(prefix.as_bytes())
}

impl Cli {
    /// 从完整的命令行（含程序名）构造，所有参数都按原样保留
    ///
    /// 在用户参数前插入一个 `--`，clap 只把第一个 `--` 当作选项结束标记，
    /// 之后出现的 `--` 等参数都作为普通值收集。
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from("chexdiff"));
        Self::parse_from(
            std::iter::once(bin)
                .chain(std::iter::once(OsString::from("--")))
                .chain(args),
        )
    }

    pub fn action(&self) -> Result<Action<'_>> {
        let Some(head) = self.args.first() else {
            return Err(ChexdiffError::MissingArguments);
        };

        if has_prefix(head, "-h") || has_prefix(head, "--help") {
            debug!("help requested by {:?}", head);
            return Ok(Action::Help);
        }
        if has_prefix(head, "-v") {
            debug!("version requested by {:?}", head);
            return Ok(Action::Version);
        }

        let [first, second] = self.args.as_slice() else {
            return Err(ChexdiffError::WrongArgumentCount {
                count: self.args.len(),
            });
        };

        // 先检查第一个参数
        let first = HexView::from_os_str(first)?;
        let second = HexView::from_os_str(second)?;

        Ok(Action::Compare { first, second })
    }
}

/// 按错误类型把提示写到对应的输出流
pub fn report_error<O: Write, E: Write>(
    err: &ChexdiffError,
    stdout: &mut O,
    stderr: &mut E,
) -> io::Result<()> {
    match err {
        ChexdiffError::MissingArguments => write!(stderr, "{USAGE}"),
        ChexdiffError::WrongArgumentCount { count } => {
            debug!("got {count} positional args");
            writeln!(stderr, "{err}")?;
            write!(stdout, "\n{USAGE}")
        }
        // 原样输出参数字节，不做 UTF-8 转换
        ChexdiffError::InvalidLength { arg } => {
            stderr.write_all(b"error: '")?;
            stderr.write_all(arg)?;
            stderr.write_all(b"' has invalid length\n")
        }
    }
}
