use std::ffi::OsStr;

use crate::error::{ChexdiffError, Result};

/// 十六进制字符串的只读视图
///
/// 直接借用命令行参数的原始字节，长度保证为偶数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexView<'a> {
    data: &'a [u8],
}

impl<'a> HexView<'a> {
    /// 创建视图，长度为奇数时返回 `InvalidLength`
    pub fn new(data: &'a [u8]) -> Result<Self> {
        if data.len() % 2 != 0 {
            return Err(ChexdiffError::InvalidLength { arg: data.to_vec() });
        }
        Ok(Self { data })
    }

    pub fn from_os_str(arg: &'a OsStr) -> Result<Self> {
        Self::new(arg.as_encoded_bytes())
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// 按字节对遍历（每项两个字符）
    pub fn pairs(&self) -> impl Iterator<Item = [u8; 2]> + 'a {
        self.data.chunks_exact(2).map(|c| [c[0], c[1]])
    }
}
