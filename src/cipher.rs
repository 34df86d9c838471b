//! # 密码适配模块
//!
//! 嵌入之前对消息做可逆的带密钥替换，提取之后再还原。
//! 编解码核心只依赖 `Cipher` trait 的往返保证，不关心具体算法。

use crate::error::{Result, StegoError};

const ALPHABET_LEN: u8 = 26;

/// 非空的加密密钥。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherKey(String);

impl CipherKey {
    /// # Errors
    ///
    /// 密钥为空时返回 `EmptyKey`。
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(StegoError::EmptyKey);
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 变换方向：`Forward` 用于嵌入前加密，`Reverse` 用于提取后解密。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Reverse,
}

/// 带密钥的可逆文本变换。
///
/// 实现必须是确定性的，并满足
/// `transform(transform(text, key, Forward), key, Reverse) == text`。
/// 若输入的每个字符码点都不超过 `0xFF`，输出也必须如此。
pub trait Cipher {
    fn transform(&self, text: &str, key: &CipherKey, direction: Direction) -> String;
}

/// 经典维吉尼亚密码。
///
/// 只移位 ASCII 字母 (保留大小写)，密钥也只在遇到字母时前进；
/// 其余字符原样保留，因此 ASCII 文本加密后仍是 ASCII。
#[derive(Debug, Clone, Copy, Default)]
pub struct Vigenere;

impl Vigenere {
    fn shift_of(key_char: char) -> u8 {
        if key_char.is_ascii_alphabetic() {
            key_char.to_ascii_uppercase() as u8 - b'A'
        } else {
            (u32::from(key_char) % u32::from(ALPHABET_LEN)) as u8
        }
    }
}

impl Cipher for Vigenere {
    fn transform(&self, text: &str, key: &CipherKey, direction: Direction) -> String {
        let shifts: Vec<u8> = key.as_str().chars().map(Self::shift_of).collect();
        let mut position = 0;

        text.chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return c;
                }
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let shift = match direction {
                    Direction::Forward => shifts[position % shifts.len()],
                    Direction::Reverse => {
                        (ALPHABET_LEN - shifts[position % shifts.len()]) % ALPHABET_LEN
                    }
                };
                position += 1;
                char::from((c as u8 - base + shift) % ALPHABET_LEN + base)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> CipherKey {
        CipherKey::new(k).unwrap()
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(CipherKey::new(""), Err(StegoError::EmptyKey)));
    }

    #[test]
    fn matches_the_classic_lemon_example() {
        let ciphertext = Vigenere.transform("ATTACKATDAWN", &key("LEMON"), Direction::Forward);
        assert_eq!(ciphertext, "LXFOPVEFRNHR");
    }

    #[test]
    fn preserves_case_and_skips_non_letters() {
        let ciphertext = Vigenere.transform("Hello, World!", &key("KEY"), Direction::Forward);
        assert_eq!(ciphertext, "Rijvs, Uyvjn!");
    }

    #[test]
    fn round_trips_with_any_key() {
        let text = "Attack at dawn, 10:45! Ünïcödé bleibt.";
        for k in ["KEY", "lemon", "p4ss w0rd", "ñ", "🔑"] {
            let ciphertext = Vigenere.transform(text, &key(k), Direction::Forward);
            assert_eq!(
                Vigenere.transform(&ciphertext, &key(k), Direction::Reverse),
                text
            );
        }
    }
}
