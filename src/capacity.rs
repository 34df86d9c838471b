//! # 容量计算模块
//!
//! 图像能容纳的最大消息长度只取决于图像尺寸。
//! 编码前的校验与对外的容量查询都使用这里的同一个公式。

use crate::constants::{BITS_PER_CHAR, CHANNELS_PER_PIXEL, DELIMITER_BITS};

/// 图像中可用于隐写的 LSB 总数：`width * height * 3`。
pub fn available_bits(width: u32, height: u32) -> u64 {
    u64::from(width) * u64::from(height) * CHANNELS_PER_PIXEL
}

/// 图像可容纳的最大字符数：`max(0, floor((width * height * 3 - 16) / 8))`。
pub fn capacity(width: u32, height: u32) -> usize {
    let chars = available_bits(width, height).saturating_sub(DELIMITER_BITS as u64)
        / BITS_PER_CHAR as u64;
    usize::try_from(chars).unwrap_or(usize::MAX)
}
