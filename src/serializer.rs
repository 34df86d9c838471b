//! # 比特序列化模块
//!
//! 文本与比特序列之间的相互转换。每个字符序列化为 8 位 (高位在前)，
//! 最后追加 16 位的消息结束分隔符。

use crate::constants::{BITS_PER_CHAR, DELIMITER, DELIMITER_BITS, MAX_CODEPOINT};
use crate::error::{Result, StegoError};

/// 待写入像素 LSB 的有序比特序列：`文本比特 ++ 分隔符比特`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// 分隔符之前的比特数。
    pub fn payload_len(&self) -> usize {
        self.bits.len() - DELIMITER_BITS
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

fn byte_bits(byte: u8) -> impl Iterator<Item = bool> {
    (0..BITS_PER_CHAR).rev().map(move |i| (byte >> i) & 1 == 1)
}

fn delimiter_bits() -> impl Iterator<Item = bool> {
    (0..DELIMITER_BITS).rev().map(|i| (DELIMITER >> i) & 1 == 1)
}

fn pack(bits: &[bool]) -> u16 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u16::from(bit))
}

/// 将文本序列化为比特序列并追加分隔符。
///
/// # Errors
///
/// * 任一字符的码点大于 `0xFF` 时返回 `UnsupportedCodepoint`。
/// * 文本自身的比特中出现分隔符模式时返回 `DelimiterCollision`，
///   否则提取时消息会在该处被截断。
pub fn serialize(text: &str) -> Result<BitSequence> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR + DELIMITER_BITS);

    for (index, character) in text.chars().enumerate() {
        let code = u32::from(character);
        if code > MAX_CODEPOINT {
            return Err(StegoError::UnsupportedCodepoint { character, index });
        }
        bits.extend(byte_bits(code as u8));
    }

    if let Some(bit_offset) = locate_delimiter(&bits) {
        return Err(StegoError::DelimiterCollision { bit_offset });
    }

    bits.extend(delimiter_bits());
    Ok(BitSequence { bits })
}

/// 将比特按 8 位一组还原为文本。末尾不足 8 位的部分被丢弃。
///
/// 调用方负责先截去分隔符及其之后的比特。
pub fn deserialize(bits: &[bool]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|group| char::from(pack(group) as u8))
        .collect()
}

/// 返回分隔符在比特序列中第一次出现的位置。
pub fn locate_delimiter(bits: &[bool]) -> Option<usize> {
    bits.windows(DELIMITER_BITS)
        .position(|window| pack(window) == DELIMITER)
}

/// 流式的分隔符查找与字节重组。
///
/// 逐比特输入，通过 16 位滑动窗口识别分隔符，无需先把整幅图像的
/// LSB 物化为一个缓冲区。结果与 `locate_delimiter` + `deserialize` 一致。
#[derive(Debug, Default)]
pub struct FrameScanner {
    window: u16,
    seen: usize,
    current: u8,
    bytes: Vec<u8>,
    end: Option<usize>,
}

impl FrameScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// 输入下一个比特。找到分隔符后返回 `true`，之后的输入被忽略。
    pub fn push(&mut self, bit: bool) -> bool {
        if self.end.is_some() {
            return true;
        }

        self.window = (self.window << 1) | u16::from(bit);
        self.current = (self.current << 1) | u8::from(bit);
        self.seen += 1;

        if self.seen % BITS_PER_CHAR == 0 {
            self.bytes.push(self.current);
            self.current = 0;
        }

        if self.seen >= DELIMITER_BITS && self.window == DELIMITER {
            self.end = Some(self.seen - DELIMITER_BITS);
        }

        self.end.is_some()
    }

    /// 分隔符之前的文本；尚未遇到分隔符时为 `None`。
    pub fn into_message(self) -> Option<String> {
        let end = self.end?;
        Some(
            self.bytes[..end / BITS_PER_CHAR]
                .iter()
                .map(|&byte| char::from(byte))
                .collect(),
        )
    }
}

/// 扫描比特流直到第一个分隔符，返回其之前的文本。
pub fn scan<I>(bits: I) -> Option<String>
where
    I: IntoIterator<Item = bool>,
{
    let mut scanner = FrameScanner::new();
    for bit in bits {
        if scanner.push(bit) {
            break;
        }
    }
    scanner.into_message()
}
