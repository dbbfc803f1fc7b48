//! 测试用 NBT 字节构造工具
#![allow(dead_code)]

pub const END: u8 = 0;
pub const BYTE: u8 = 1;
pub const SHORT: u8 = 2;
pub const INT: u8 = 3;
pub const LONG: u8 = 4;
pub const FLOAT: u8 = 5;
pub const DOUBLE: u8 = 6;
pub const BYTE_ARRAY: u8 = 7;
pub const STRING: u8 = 8;
pub const LIST: u8 = 9;
pub const COMPOUND: u8 = 10;
pub const INT_ARRAY: u8 = 11;
pub const LONG_ARRAY: u8 = 12;

/// 按顺序追加大端序字段的字节缓冲
#[derive(Default)]
pub struct NbtBuilder {
    pub bytes: Vec<u8>,
}

impl NbtBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以根 Compound 头开始
    pub fn root(name: &str) -> Self {
        let mut b = Self::new();
        b.u8(COMPOUND).name(name);
        b
    }

    pub fn u8(&mut self, v: u8) -> &mut Self {
        self.bytes.push(v);
        self
    }

    pub fn i16(&mut self, v: i16) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn i64(&mut self, v: i64) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn f64(&mut self, v: f64) -> &mut Self {
        self.bytes.extend_from_slice(&v.to_be_bytes());
        self
    }

    /// u16 长度前缀 + 文本（测试文本均为 ASCII/BMP，与 Modified UTF-8 相同）
    pub fn name(&mut self, s: &str) -> &mut Self {
        self.bytes
            .extend_from_slice(&(s.len() as u16).to_be_bytes());
        self.bytes.extend_from_slice(s.as_bytes());
        self
    }

    /// 命名字段头：类型 + 名称
    pub fn field(&mut self, kind: u8, name: &str) -> &mut Self {
        self.u8(kind).name(name)
    }

    pub fn end(&mut self) -> &mut Self {
        self.u8(END)
    }

    pub fn build(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// 构造 level.dat 结构的原始 NBT
pub struct LevelBuilder {
    b: NbtBuilder,
    in_player: bool,
}

impl LevelBuilder {
    pub fn new() -> Self {
        let mut b = NbtBuilder::root("");
        b.field(COMPOUND, "Data");
        Self { b, in_player: false }
    }

    pub fn raw(&mut self) -> &mut NbtBuilder {
        &mut self.b
    }

    pub fn string(&mut self, name: &str, value: &str) -> &mut Self {
        self.b.field(STRING, name).name(value);
        self
    }

    pub fn int(&mut self, name: &str, value: i32) -> &mut Self {
        self.b.field(INT, name).i32(value);
        self
    }

    pub fn long(&mut self, name: &str, value: i64) -> &mut Self {
        self.b.field(LONG, name).i64(value);
        self
    }

    pub fn byte(&mut self, name: &str, value: i8) -> &mut Self {
        self.b.field(BYTE, name).u8(value as u8);
        self
    }

    pub fn begin_player(&mut self) -> &mut Self {
        self.b.field(COMPOUND, "Player");
        self.in_player = true;
        self
    }

    pub fn end_player(&mut self) -> &mut Self {
        self.b.end();
        self.in_player = false;
        self
    }

    pub fn pos(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.b.field(LIST, "Pos").u8(DOUBLE).i32(3).f64(x).f64(y).f64(z);
        self
    }

    pub fn build(&mut self) -> Vec<u8> {
        if self.in_player {
            self.end_player();
        }
        // Data 结束 + 根结束
        self.b.end().end();
        self.b.build()
    }
}
