use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};

use super::view::HexView;

/// 高亮起始（红色前景）
pub const RED: &str = "\x1b[31m";
/// 恢复默认样式
pub const RESET: &str = "\x1b[0m";

/// 比较两个字节对，忽略 ASCII 大小写
///
/// 只有 `A`-`Z` 会被转换为小写，其余字符按原始值比较。
pub fn digit_pair_eq(a: [u8; 2], b: [u8; 2]) -> bool {
    a[0].to_ascii_lowercase() == b[0].to_ascii_lowercase()
        && a[1].to_ascii_lowercase() == b[1].to_ascii_lowercase()
}

fn write_highlighted<W: Write>(out: &mut W, bytes: &[u8]) -> io::Result<()> {
    out.write_all(RED.as_bytes())?;
    out.write_all(bytes)?;
    out.write_all(RESET.as_bytes())
}

impl HexView<'_> {
    /// 以 `other` 为参照输出本字符串，不同的字节对标红
    ///
    /// 本字符串比 `other` 长时，超出的部分整体标红；输出以换行结尾。
    pub fn write_render<W: Write>(&self, other: &HexView<'_>, out: &mut W) -> io::Result<()> {
        for (ours, theirs) in self.pairs().zip(other.pairs()) {
            if digit_pair_eq(ours, theirs) {
                out.write_all(&ours)?;
            } else {
                write_highlighted(out, &ours)?;
            }
        }

        if self.len() > other.len() {
            write_highlighted(out, &self.as_bytes()[other.len()..])?;
        }

        out.write_all(b"\n")
    }

    pub fn render(&self, other: &HexView<'_>) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.len() * 2 + 1);
        // Vec<u8> 的写入不会失败
        let _ = self.write_render(other, &mut buf);
        buf
    }

    /// 公共长度内不相同的字节对序号
    pub fn mismatched_pairs(&self, other: &HexView<'_>) -> Vec<usize> {
        self.pairs()
            .zip(other.pairs())
            .enumerate()
            .filter_map(|(i, (a, b))| if digit_pair_eq(a, b) { None } else { Some(i) })
            .collect()
    }
}

/// 先以第二个字符串为参照输出第一个，再反过来输出第二个
pub fn compare<W: Write>(first: &HexView<'_>, second: &HexView<'_>, out: &mut W) -> Result<()> {
    debug!(
        "comparing {} and {} chars, {} differing pairs",
        first.len(),
        second.len(),
        first.mismatched_pairs(second).len()
    );

    first
        .write_render(second, out)
        .context("无法输出第一个字符串")?;
    second
        .write_render(first, out)
        .context("无法输出第二个字符串")?;
    out.flush().context("无法刷新输出")?;

    Ok(())
}
