//! # 编解码流程模块
//!
//! 将密码适配、比特序列化、容量校验与像素 LSB 读写串联起来：
//!
//! * 编码：加密 → 序列化 → 容量校验 → 写入 LSB
//! * 解码：读取 LSB → 反序列化 → 解密
//!
//! 所有函数都是无状态的，本模块不输出任何日志。

use crate::capacity::capacity;
use crate::cipher::{Cipher, CipherKey, Direction};
use crate::constants::OUTPUT_EXTENSION;
use crate::error::{Result, StegoError};
use crate::serializer::serialize;
use crate::steganography::{embed, extract};
use image::{ImageError, ImageFormat, ImageReader, RgbImage};
use std::path::Path;

/// 加密消息并隐写到图像的副本中。
///
/// # Errors
///
/// * 加密后的消息包含单字节以外的字符 (`UnsupportedCodepoint`)。
/// * 消息比特中出现分隔符 (`DelimiterCollision`)。
/// * 图像容量不足 (`CapacityExceeded`)，此时不会产生任何输出。
pub fn encode_message(
    image: &RgbImage,
    message: &str,
    cipher: &dyn Cipher,
    key: &CipherKey,
) -> Result<RgbImage> {
    let ciphertext = cipher.transform(message, key, Direction::Forward);
    let bits = serialize(&ciphertext)?;
    embed(image, &bits)
}

/// 从图像中提取并解密消息。没有找到分隔符时返回 `None`。
pub fn decode_message(image: &RgbImage, cipher: &dyn Cipher, key: &CipherKey) -> Option<String> {
    extract(image).map(|ciphertext| cipher.transform(&ciphertext, key, Direction::Reverse))
}

/// 图像可容纳的最大字符数。
pub fn message_capacity(image: &RgbImage) -> usize {
    let (width, height) = image.dimensions();
    capacity(width, height)
}

/// 读取 PNG 或 JPEG 图像并规范化为 3 通道 RGB。
///
/// 格式根据文件内容识别，扩展名错误或缺失的文件同样可以读取；
/// 只有内容无法识别时才退回到扩展名。
/// 带 Alpha 通道的图像会丢弃 Alpha，灰度图像会扩展为 RGB。
pub fn load_image(path: &Path) -> Result<RgbImage> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::from)
        .and_then(|reader| reader.decode())
        .map(|image| image.to_rgb8())
        .map_err(|source| StegoError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}

/// 以 PNG 格式保存图像。其他扩展名一律拒绝。
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(OUTPUT_EXTENSION));

    if !is_png {
        return Err(StegoError::UnsupportedOutputFormat {
            path: path.to_path_buf(),
        });
    }

    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| StegoError::ImageSave {
            path: path.to_path_buf(),
            source,
        })
}
