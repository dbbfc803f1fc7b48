//! 压缩格式识别与解压

use crate::error::{NbtError, Result};
use log::debug;
use std::borrow::Cow;
use std::io::Read;

/// 存档字节流的压缩方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zlib,
    /// 无压缩（部分存档直接保存原始 NBT）
    None,
}

impl Compression {
    /// 根据魔数识别压缩方式
    pub fn detect(bytes: &[u8]) -> Self {
        match bytes {
            [0x1F, 0x8B, ..] => Compression::Gzip,
            [cmf, flg, ..] if is_zlib_header(*cmf, *flg) => Compression::Zlib,
            _ => Compression::None,
        }
    }
}

/// zlib 头：CM = 8（deflate），CINFO <= 7，且 CMF/FLG 组成的 16 位数是 31 的倍数
fn is_zlib_header(cmf: u8, flg: u8) -> bool {
    cmf & 0x0F == 8 && cmf >> 4 <= 7 && (u16::from(cmf) << 8 | u16::from(flg)) % 31 == 0
}

/// 剥离 gzip / zlib 封装，未识别出压缩头时原样返回
///
/// 识别出压缩头但解压失败时返回 [`NbtError::Decompression`]，不会回退为原始数据。
pub fn decompress(bytes: &[u8]) -> Result<Cow<'_, [u8]>> {
    let compression = Compression::detect(bytes);
    debug!("检测到压缩方式: {:?}", compression);

    let mut decompressed = Vec::new();
    match compression {
        Compression::Gzip => {
            let mut decoder = flate2::read::GzDecoder::new(bytes);
            decoder
                .read_to_end(&mut decompressed)
                .map_err(NbtError::Decompression)?;
        }
        Compression::Zlib => {
            let mut decoder = flate2::read::ZlibDecoder::new(bytes);
            decoder
                .read_to_end(&mut decompressed)
                .map_err(NbtError::Decompression)?;
        }
        Compression::None => return Ok(Cow::Borrowed(bytes)),
    }
    Ok(Cow::Owned(decompressed))
}
