//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，先用维吉尼亚密码混淆文本，再将其隐藏到图像中。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具。文本先经维吉尼亚密码混淆，再隐藏到 RGB 图像 (PNG, JPEG) 中，结果始终保存为无损的 PNG。"
)]
pub struct Cli {
    /// 提高日志详细程度 (-v 为 info，-vv 为 debug)。
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：encode (隐藏)、decode (恢复) 和 capacity (容量查询)。
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 加密文本并隐藏到图像中，输出 PNG。
    Encode(EncodeArgs),

    /// 从经过隐写的图像中恢复并解密文本。
    Decode(DecodeArgs),

    /// 查询图像最多能隐藏多少个字符。
    Capacity(CapacityArgs),
}

/// 'encode' 命令所需的参数。
///
/// 既没有 `--message` 也没有 `--text` 时，从标准输入读取消息。
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// 用于隐写的输入图像文件路径 (PNG, JPEG)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容。
    #[arg(short, long, conflicts_with = "text")]
    pub message: Option<String>,

    /// 要隐藏的文本内容的文件路径，`-` 表示标准输入。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 加密密钥，也可通过环境变量 `LSB_CIPHER_KEY` 提供。
    #[arg(short, long, env = "LSB_CIPHER_KEY", hide_env_values = true)]
    pub key: String,

    /// 输出 PNG 图像的路径，默认为输入图像旁的 `doctored_<名称>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 解密密钥，也可通过环境变量 `LSB_CIPHER_KEY` 提供。
    #[arg(short, long, env = "LSB_CIPHER_KEY", hide_env_values = true)]
    pub key: String,

    /// 保存恢复文本的路径，未指定时直接打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 输出文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'capacity' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// 要查询的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}
