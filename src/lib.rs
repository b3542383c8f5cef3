//! # chexdiff
//!
//! 十六进制字符串对比工具库
//!
//! ## 功能
//!
//! - 按字节对（两个字符）比较两个十六进制字符串，忽略大小写
//! - 不同的字节对以 ANSI 红色标出，较长字符串多出的部分整体标红
//! - 每个字符串都会以另一个为参照各输出一行
//!
//! ## 使用示例
//!
//! ```
//! use chexdiff::hexdiff::{HexView, compare};
//!
//! let first = HexView::new(b"1234").unwrap();
//! let second = HexView::new(b"12ff").unwrap();
//!
//! let mut out = Vec::new();
//! compare(&first, &second, &mut out).unwrap();
//! assert_eq!(out, b"12\x1b[31m34\x1b[0m\n12\x1b[31mff\x1b[0m\n");
//! ```

pub mod cli;
pub mod error;
pub mod hexdiff;

// 重新导出常用类型
pub use error::ChexdiffError;
pub use hexdiff::{HexView, compare};
