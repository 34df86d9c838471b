//! # 错误类型模块
//!
//! 编解码核心返回的所有错误。未找到隐藏消息不属于错误，
//! 提取函数通过 `None` 表示这一正常结果。

use std::path::PathBuf;
use thiserror::Error;

/// 隐写编解码过程中可能出现的错误。
#[derive(Debug, Error)]
pub enum StegoError {
    /// 输入图像无法读取或解码。
    #[error("unable to load image '{}': {source}", path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 输出图像无法编码或写入。
    #[error("unable to save image '{}': {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 输出路径不是 PNG。
    #[error("output must be a lossless PNG file, got '{}'", path.display())]
    UnsupportedOutputFormat { path: PathBuf },

    /// 消息 (加密后) 的比特数超出图像可用的 LSB 数量。
    #[error(
        "message of {length} characters exceeds image capacity of {capacity} characters \
         ({required_bits} bits required, {available_bits} available)"
    )]
    CapacityExceeded {
        length: usize,
        capacity: usize,
        required_bits: usize,
        available_bits: u64,
    },

    /// 字符码点超出一个字节。
    #[error("character {character:?} at index {index} does not fit in a single byte")]
    UnsupportedCodepoint { character: char, index: usize },

    /// 消息自身的比特模式包含分隔符，提取时会被提前截断。
    #[error("message bits contain the end-of-message delimiter at bit offset {bit_offset}")]
    DelimiterCollision { bit_offset: usize },

    /// 加密密钥为空。
    #[error("cipher key must not be empty")]
    EmptyKey,
}

pub type Result<T> = std::result::Result<T, StegoError>;
