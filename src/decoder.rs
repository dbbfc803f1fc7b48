//! NBT 递归下降解码

use crate::compression::decompress;
use crate::error::{NbtError, Result};
use crate::reader::BinaryReader;
use crate::tag::{Compound, List, Tag, TagKind};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 默认最大嵌套深度
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// 解码选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Compound/List 最大嵌套层数，根 Compound 计为第 1 层
    pub max_depth: usize,
    /// 非法 Modified UTF-8 以占位符替换而非报错
    pub lenient_strings: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            lenient_strings: false,
        }
    }
}

/// 一次解码得到的完整文档：根名称 + 根 Compound
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root_name: String,
    root: Compound,
}

impl Document {
    pub fn new(root_name: impl Into<String>, root: Compound) -> Self {
        Self {
            root_name: root_name.into(),
            root,
        }
    }

    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    pub fn root(&self) -> &Compound {
        &self.root
    }

    /// 按路径查找，路径从根 Compound 开始
    pub fn get_path(&self, path: &[&str]) -> Option<&Tag> {
        self.root.get_path(path)
    }

    pub fn into_parts(self) -> (String, Compound) {
        (self.root_name, self.root)
    }
}

/// 使用默认选项解码（自动识别 gzip / zlib / 无压缩）
pub fn decode(bytes: &[u8]) -> Result<Document> {
    decode_with(bytes, &DecodeOptions::default())
}

pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<Document> {
    let raw = decompress(bytes)?;
    decode_raw(&raw, options)
}

/// 解码未压缩的 NBT 字节
pub fn decode_raw(bytes: &[u8], options: &DecodeOptions) -> Result<Document> {
    debug!("开始解码 NBT ({} 字节)", bytes.len());
    let mut decoder = Decoder {
        reader: BinaryReader::new(bytes),
        options,
    };
    let document = decoder.read_document()?;

    let trailing = decoder.reader.remaining();
    if trailing > 0 {
        debug!("根标签之后还有 {} 字节，已忽略", trailing);
    }
    Ok(document)
}

/// 读取存档文件；传入目录时读取其中的 `level.dat`
pub fn load<P: AsRef<Path>>(path: P) -> Result<Document> {
    load_with(path, &DecodeOptions::default())
}

pub fn load_with<P: AsRef<Path>>(path: P, options: &DecodeOptions) -> Result<Document> {
    let path = resolve_level_dat(path.as_ref());
    debug!("读取存档: {}", path.display());
    let bytes = fs::read(&path)?;
    decode_with(&bytes, options)
}

fn resolve_level_dat(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join("level.dat")
    } else {
        path.to_path_buf()
    }
}

struct Decoder<'a, 'o> {
    reader: BinaryReader<'a>,
    options: &'o DecodeOptions,
}

impl Decoder<'_, '_> {
    fn read_document(&mut self) -> Result<Document> {
        let id = self.reader.read_u8()?;
        if id != TagKind::Compound.id() {
            return Err(NbtError::InvalidRoot(id));
        }
        let root_name = self.read_string()?;
        let root = self.read_compound(1)?;
        Ok(Document { root_name, root })
    }

    fn read_kind(&mut self) -> Result<TagKind> {
        let id = self.reader.read_u8()?;
        TagKind::from_u8(id).ok_or(NbtError::InvalidTagKind(id))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = self.reader.read_u16()?;
        self.reader
            .read_modified_utf8(usize::from(len), self.options.lenient_strings)
    }

    fn read_array_len(&mut self) -> Result<usize> {
        let len = self.reader.read_i32()?;
        usize::try_from(len).map_err(|_| NbtError::NegativeLength(len))
    }

    fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            return Err(NbtError::MaxDepthExceeded(self.options.max_depth));
        }
        Ok(())
    }

    fn read_payload(&mut self, kind: TagKind, depth: usize) -> Result<Tag> {
        let tag = match kind {
            TagKind::End => return Err(NbtError::InvalidTagKind(kind.id())),
            TagKind::Byte => Tag::Byte(self.reader.read_i8()?),
            TagKind::Short => Tag::Short(self.reader.read_i16()?),
            TagKind::Int => Tag::Int(self.reader.read_i32()?),
            TagKind::Long => Tag::Long(self.reader.read_i64()?),
            TagKind::Float => Tag::Float(self.reader.read_f32()?),
            TagKind::Double => Tag::Double(self.reader.read_f64()?),
            TagKind::ByteArray => {
                let len = self.read_array_len()?;
                let bytes = self.reader.read_bytes(len)?;
                Tag::ByteArray(bytes.iter().map(|&b| b as i8).collect())
            }
            TagKind::String => Tag::String(self.read_string()?),
            TagKind::List => Tag::List(self.read_list(depth)?),
            TagKind::Compound => Tag::Compound(self.read_compound(depth)?),
            TagKind::IntArray => {
                let len = self.read_array_len()?;
                let bytes = self.reader.read_bytes(len.saturating_mul(4))?;
                Tag::IntArray(
                    bytes
                        .chunks_exact(4)
                        .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                        .collect(),
                )
            }
            TagKind::LongArray => {
                let len = self.read_array_len()?;
                let bytes = self.reader.read_bytes(len.saturating_mul(8))?;
                Tag::LongArray(
                    bytes
                        .chunks_exact(8)
                        .map(|c| {
                            i64::from_be_bytes([c[0], c[1], c[2], c[3], c[4], c[5], c[6], c[7]])
                        })
                        .collect(),
                )
            }
        };
        Ok(tag)
    }

    fn read_list(&mut self, depth: usize) -> Result<List> {
        self.enter(depth)?;
        let kind = self.read_kind()?;
        let len = self.reader.read_i32()?;
        // 负长度按空列表处理，部分存档依赖这一宽松行为
        if len <= 0 {
            return Ok(List::empty(kind));
        }
        if kind == TagKind::End {
            return Err(NbtError::InvalidTagKind(kind.id()));
        }

        let len = len as usize;
        let mut items = Vec::with_capacity(len.min(self.reader.remaining()));
        for _ in 0..len {
            items.push(self.read_payload(kind, depth + 1)?);
        }
        Ok(List::from_decoded(kind, items))
    }

    fn read_compound(&mut self, depth: usize) -> Result<Compound> {
        self.enter(depth)?;
        let mut map = Compound::new();
        loop {
            let kind = self.read_kind()?;
            if kind == TagKind::End {
                break;
            }
            let name = self.read_string()?;
            let value = self.read_payload(kind, depth + 1)?;
            map.insert(name, value);
        }
        Ok(map)
    }
}
