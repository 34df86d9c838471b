/// 消息结束分隔符：15 个 `1` 后跟一个 `0`。
/// 提取时在 LSB 比特流中查找它的第一次出现，以此确定消息的终点。
pub const DELIMITER: u16 = 0b1111_1111_1111_1110;

/// 分隔符占用的比特数。
pub const DELIMITER_BITS: usize = 16;

/// 每个字符按 `u8` (8 bits) 序列化，高位在前。
pub const BITS_PER_CHAR: usize = 8;

/// 每个像素可用于隐写的通道数 (R, G, B)。
/// 任何输入图像在编解码之前都会被规范化为 3 通道。
pub const CHANNELS_PER_PIXEL: u64 = 3;

/// 可隐写字符的最大码点，超出一个字节的字符会破坏比特流的对齐。
pub const MAX_CODEPOINT: u32 = 0xFF;

/// 未指定输出路径时，生成的隐写图像文件名前缀。
pub const DEFAULT_OUTPUT_PREFIX: &str = "doctored_";

/// 作为文本文件路径时表示从标准输入读取消息。
pub const STDIN_PATH: &str = "-";

/// 交互式读取消息时显示的提示。
pub const MESSAGE_PROMPT: &str = "Enter the message to hide: ";

/// 输出图像唯一允许的扩展名。有损格式会在重新压缩时破坏 LSB 数据。
pub const OUTPUT_EXTENSION: &str = "png";
