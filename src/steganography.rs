use crate::capacity::{available_bits, capacity};
use crate::constants::BITS_PER_CHAR;
use crate::error::{Result, StegoError};
use crate::serializer::{BitSequence, scan};
use image::RgbImage;

// 扫描顺序：自上而下逐行，行内从左到右，像素内按 R, G, B。
// 写入与读取都只通过下面两个函数遍历图像。

pub fn lsb_stream(image: &RgbImage) -> impl Iterator<Item = bool> + '_ {
    image
        .pixels()
        .flat_map(|pixel| pixel.0)
        .map(|channel| channel & 1 == 1)
}

pub fn channels_mut(image: &mut RgbImage) -> impl Iterator<Item = &mut u8> + '_ {
    image.pixels_mut().flat_map(|pixel| pixel.0.iter_mut())
}

pub fn embed(image: &RgbImage, bits: &BitSequence) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    let available_bits = available_bits(width, height);

    if bits.len() as u64 > available_bits {
        return Err(StegoError::CapacityExceeded {
            length: bits.payload_len() / BITS_PER_CHAR,
            capacity: capacity(width, height),
            required_bits: bits.len(),
            available_bits,
        });
    }

    let mut encoded = image.clone();

    for channel in channels_mut(&mut encoded) {
        *channel &= 0xFE;
    }

    for (channel, bit) in channels_mut(&mut encoded).zip(bits.iter()) {
        if bit {
            *channel |= 1;
        }
    }

    Ok(encoded)
}

pub fn extract(image: &RgbImage) -> Option<String> {
    scan(lsb_stream(image))
}
