use clap::Parser;
use env_logger::Env;

use lsb_cipher::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_decode, handle_encode},
};

/// 程序的主入口点
///
/// 负责初始化日志、解析命令行参数，并根据指定的子命令
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // RUST_LOG 优先，否则由 -v 的次数决定日志级别
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args).map(|_| ()),
        Commands::Capacity(args) => handle_capacity(args).map(|_| ()),
    }
}
