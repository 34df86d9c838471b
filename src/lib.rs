//! # lsb_cipher 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：比特序列化、容量计算、
//! 像素 LSB 的写入与读取，以及嵌入前后的维吉尼亚密码变换。

// 声明库包含的所有模块。

pub mod capacity;
pub mod cipher;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod serializer;
pub mod steganography;

pub use error::{Result, StegoError};
