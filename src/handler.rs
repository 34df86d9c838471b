//! # 命令处理逻辑模块
//!
//! 包含处理 `encode`、`decode` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用编解码核心以及向用户报告结果。

use crate::cipher::{CipherKey, Vigenere};
use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs};
use crate::codec::{decode_message, encode_message, load_image, message_capacity, save_png};
use crate::constants::{DEFAULT_OUTPUT_PREFIX, MESSAGE_PROMPT, OUTPUT_EXTENSION, STDIN_PATH};
use crate::error::StegoError;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use log::{debug, info, warn};
use std::fs;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

/// 未指定输出路径时的默认隐写图像路径：与输入同目录的 `doctored_<名称>.png`。
pub fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    image.with_file_name(format!("{DEFAULT_OUTPUT_PREFIX}{stem}.{OUTPUT_EXTENSION}"))
}

/// 从输入流读取要隐藏的消息。
///
/// 交互模式下先提示用户，只读取一行并去掉行尾换行；
/// 否则 (如管道输入) 读取全部内容，原样保留。
pub fn read_message<R: BufRead>(mut input: R, interactive: bool) -> Result<String> {
    let mut message = String::new();

    if interactive {
        eprint!("{}", MESSAGE_PROMPT.cyan());
        io::stderr().flush()?;
        input.read_line(&mut message)?;
        let trimmed = message.trim_end_matches(['\r', '\n']).len();
        message.truncate(trimmed);
    } else {
        input.read_to_string(&mut message)?;
    }

    Ok(message)
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Output file already exists: {} \nUse --force to overwrite it.",
            path.to_string_lossy().red().bold()
        );
    }
    Ok(())
}

/// 处理 'Encode' 命令的执行逻辑。
///
/// 读取图像和消息，用维吉尼亚密码加密后隐写到图像中，结果以 PNG 保存。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和密钥的 `EncodeArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 密钥为空。
/// * 无法读取输入的图像、文本文件或标准输入。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像容量不足，或消息包含无法用单字节表示的字符。
/// * 无法写入到目标图像文件。
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let key = CipherKey::new(args.key).context("A non-empty cipher key is required")?;

    let message = match (args.message, &args.text) {
        (Some(message), _) => message,
        (None, Some(text)) if text.as_os_str() != STDIN_PATH => fs::read_to_string(text)
            .with_context(|| {
                format!(
                    "Unable to read text file: {}",
                    text.to_string_lossy().red().bold()
                )
            })?,
        _ => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            read_message(stdin.lock(), interactive)
                .context("Unable to read the message from standard input")?
        }
    };

    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let picture = load_image(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!(
        "Loaded {}x{} image from {}",
        picture.width(),
        picture.height(),
        args.image.display()
    );

    let capacity = message_capacity(&picture);
    let length = message.chars().count();
    debug!("Message length {length}, image capacity {capacity}");

    let encoded = encode_message(&picture, &message, &Vigenere, &key).map_err(|err| match err {
        StegoError::CapacityExceeded { .. } => anyhow::Error::new(err).context(format!(
            "Not enough space in the image {} to hide the text. \nRequired: {}, Available: {}",
            args.image.to_string_lossy().red().bold(),
            length.to_string().red().bold(),
            capacity.to_string().green().bold()
        )),
        other => anyhow::Error::new(other).context("Failed to hide the message in the image."),
    })?;

    save_png(&encoded, &dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;
    info!("Wrote encoded image to {}", dest.display());

    println!(
        "The text has been successfully hidden and saved: {} ({} of {} characters used)",
        dest.to_string_lossy().green().bold(),
        length.to_string().green(),
        capacity.to_string().green()
    );

    Ok(())
}

/// 处理 'Decode' 命令的执行逻辑。
///
/// 读取经过隐写的图像，提取并解密消息，打印到终端或写入文本文件。
/// 图像中没有隐藏消息是正常结果，返回 `Ok(None)`。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 密钥为空。
/// * 无法读取输入的图像文件。
/// * 输出文件已存在且未指定 `--force`，或无法写入。
pub fn handle_decode(args: DecodeArgs) -> Result<Option<String>> {
    let key = CipherKey::new(args.key).context("A non-empty cipher key is required")?;

    if let Some(text) = &args.text {
        ensure_writable(text, args.force)?;
    }

    let picture = load_image(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;
    info!(
        "Scanning {}x{} image from {}",
        picture.width(),
        picture.height(),
        args.image.display()
    );

    let Some(message) = decode_message(&picture, &Vigenere, &key) else {
        warn!("No delimiter found in {}", args.image.display());
        println!(
            "No hidden message found in: {}",
            args.image.to_string_lossy().yellow().bold()
        );
        return Ok(None);
    };
    let length = message.chars().count();
    if let (Some(first), Some(last)) = (message.chars().next(), message.chars().last()) {
        info!(
            "First character {first:?} (code {}), last character {last:?} (code {})",
            u32::from(first),
            u32::from(last)
        );
    }

    match &args.text {
        Some(text) => {
            fs::write(text, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    text.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The text has been successfully recovered and saved: {} ({} characters)",
                text.to_string_lossy().green().bold(),
                length.to_string().green()
            );
        }
        None => {
            println!(
                "{} ({} characters)",
                "The hidden text has been recovered:".green().bold(),
                length.to_string().green()
            );
            println!("{message}");
        }
    }

    Ok(Some(message))
}

/// 处理 'Capacity' 命令的执行逻辑，报告图像最多能隐藏的字符数。
pub fn handle_capacity(args: CapacityArgs) -> Result<usize> {
    let picture = load_image(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let capacity = message_capacity(&picture);
    println!(
        "{} ({}x{}) can hide up to {} characters.",
        args.image.to_string_lossy().green().bold(),
        picture.width(),
        picture.height(),
        capacity.to_string().green().bold()
    );

    Ok(capacity)
}
