//! 大端序二进制读取器

use crate::error::{NbtError, Result};
use log::warn;

/// 内存字节切片上的只进游标
///
/// 所有读取操作在剩余字节不足时返回 [`NbtError::UnexpectedEof`]，失败时游标不移动。
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// 当前游标位置（可用于调用方自行保存/比较）
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(NbtError::UnexpectedEof {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_bytes(N)?);
        Ok(buf)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_be_bytes(self.read_array()?))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_be_bytes(self.read_array()?))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_be_bytes(self.read_array()?))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_be_bytes(self.read_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_be_bytes(self.read_array()?))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_be_bytes(self.read_array()?))
    }

    /// 读取 `len` 字节的 Modified UTF-8（Java CESU-8 变体）文本
    ///
    /// 严格模式下非法序列返回 [`NbtError::InvalidEncoding`] 且游标不移动；
    /// `lenient` 为真时逐个序列解码，只把非法字节替换为 U+FFFD。
    pub fn read_modified_utf8(&mut self, len: usize, lenient: bool) -> Result<String> {
        let start = self.pos;
        let bytes = self.read_bytes(len)?;
        match cesu8::from_java_cesu8(bytes) {
            Ok(text) => Ok(text.into_owned()),
            Err(_) if lenient => {
                warn!("偏移 {} 处的字符串编码非法，已替换为占位符", start);
                Ok(decode_java_lossy(bytes))
            }
            Err(_) => {
                self.pos = start;
                Err(NbtError::InvalidEncoding { offset: start })
            }
        }
    }
}

/// 逐序列解码 Modified UTF-8，合法部分（含 `C0 80` 与代理对）原样保留
fn decode_java_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let rest = &bytes[i..];
        let decoded = sequence_len(rest)
            .and_then(|n| rest.get(..n))
            .and_then(|seq| {
                cesu8::from_java_cesu8(seq)
                    .ok()
                    .map(|text| (seq.len(), text))
            });
        match decoded {
            Some((n, text)) => {
                out.push_str(&text);
                i += n;
            }
            None => {
                out.push('\u{FFFD}');
                i += 1;
            }
        }
    }
    out
}

/// 由首字节推断序列长度；`ED A0..AF` 开头按代理对（6 字节）处理
fn sequence_len(bytes: &[u8]) -> Option<usize> {
    match bytes {
        [0xED, 0xA0..=0xAF, ..] => Some(6),
        [0x00..=0x7F, ..] => Some(1),
        [0xC0..=0xDF, ..] => Some(2),
        [0xE0..=0xEF, ..] => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_primitives() {
        let data = [
            0xFF, // i8 -1
            0x01, 0x02, // i16
            0x00, 0x00, 0x01, 0x00, // i32
            0x3F, 0x80, 0x00, 0x00, // f32 1.0
        ];
        let mut r = BinaryReader::new(&data);
        assert_eq!(r.read_i8().unwrap(), -1);
        assert_eq!(r.read_i16().unwrap(), 0x0102);
        assert_eq!(r.read_i32().unwrap(), 256);
        assert_eq!(r.read_f32().unwrap(), 1.0);
        assert!(r.is_empty());
    }

    #[test]
    fn eof_does_not_advance() {
        let data = [0x00, 0x01, 0x02];
        let mut r = BinaryReader::new(&data);
        r.read_u8().unwrap();
        match r.read_i32() {
            Err(NbtError::UnexpectedEof {
                offset,
                needed,
                remaining,
            }) => {
                assert_eq!((offset, needed, remaining), (1, 4, 2));
            }
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
        assert_eq!(r.position(), 1);
        assert_eq!(r.read_u16().unwrap(), 0x0102);
    }

    #[test]
    fn modified_utf8_null_and_supplementary() {
        // Java 将 U+0000 编码为 C0 80
        let data = [b'a', 0xC0, 0x80, b'b'];
        let mut r = BinaryReader::new(&data);
        assert_eq!(r.read_modified_utf8(4, false).unwrap(), "a\0b");

        // U+1F600 以代理对形式存储
        let data = [0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80];
        let mut r = BinaryReader::new(&data);
        assert_eq!(r.read_modified_utf8(6, false).unwrap(), "\u{1F600}");
    }

    #[test]
    fn invalid_encoding_is_strict_by_default() {
        let data = [b'o', b'k', 0xFF, 0xFE];
        let mut r = BinaryReader::new(&data);
        match r.read_modified_utf8(4, false) {
            Err(NbtError::InvalidEncoding { offset: 0 }) => {}
            other => panic!("expected InvalidEncoding, got {:?}", other),
        }
        assert_eq!(r.position(), 0);

        let replaced = r.read_modified_utf8(4, true).unwrap();
        assert_eq!(replaced, "ok\u{FFFD}\u{FFFD}");
        assert!(r.is_empty());
    }

    #[test]
    fn lenient_keeps_valid_java_sequences() {
        let data = [
            b'a', 0xC0, 0x80, // U+0000
            0xFF, // 非法
            0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80, // U+1F600
            0xED, 0xA0, 0xBD, // 孤立代理
            b'z',
        ];
        let mut r = BinaryReader::new(&data);
        assert_eq!(
            r.read_modified_utf8(data.len(), true).unwrap(),
            "a\0\u{FFFD}\u{1F600}\u{FFFD}\u{FFFD}\u{FFFD}z"
        );
    }
}
