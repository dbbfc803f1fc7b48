//! 解码错误类型

use crate::lang::Locale;
use std::io;
use thiserror::Error;

/// NBT 读取过程中可能出现的全部错误
#[derive(Error, Debug)]
pub enum NbtError {
    /// 存档文件不存在或无法读取
    #[error("failed reading save file: {0}")]
    Io(#[from] io::Error),

    /// 识别到压缩头，但压缩流已损坏
    #[error("corrupt compressed stream: {0}")]
    Decompression(#[source] io::Error),

    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    #[error("negative array length: {0}")]
    NegativeLength(i32),

    #[error("invalid modified UTF-8 string at offset {offset}")]
    InvalidEncoding { offset: usize },

    #[error("nesting exceeds maximum depth of {0}")]
    MaxDepthExceeded(usize),

    /// 根标签必须是 Compound
    #[error("root tag must be a compound, found kind {0:#04x}")]
    InvalidRoot(u8),

    #[error("invalid tag kind: {0:#04x}")]
    InvalidTagKind(u8),
}

pub type Result<T> = std::result::Result<T, NbtError>;

/// 面向用户的错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 找不到存档
    NotFound,
    /// 存档损坏或格式不支持
    Corrupt,
    Unknown,
}

impl NbtError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NbtError::Io(e) if e.kind() == io::ErrorKind::NotFound => ErrorCategory::NotFound,
            NbtError::Io(_) => ErrorCategory::Unknown,
            NbtError::Decompression(_)
            | NbtError::UnexpectedEof { .. }
            | NbtError::NegativeLength(_)
            | NbtError::InvalidEncoding { .. }
            | NbtError::MaxDepthExceeded(_)
            | NbtError::InvalidRoot(_)
            | NbtError::InvalidTagKind(_) => ErrorCategory::Corrupt,
        }
    }

    /// 生成单条用户可见的错误提示
    pub fn user_message(&self, locale: Locale) -> String {
        let phrases = locale.phrases();
        match self.category() {
            ErrorCategory::NotFound => phrases.file_not_found.to_string(),
            ErrorCategory::Corrupt => format!("{}: {}", phrases.corrupt_save, self),
            ErrorCategory::Unknown => format!("{}: {}", phrases.unknown_error, self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let err = NbtError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.user_message(Locale::En), "save file not found");
        assert_eq!(err.user_message(Locale::Zh), "找不到 level.dat 文件！");
    }

    #[test]
    fn decode_errors_are_corrupt() {
        assert_eq!(NbtError::InvalidRoot(1).category(), ErrorCategory::Corrupt);
        assert_eq!(NbtError::MaxDepthExceeded(4).category(), ErrorCategory::Corrupt);
        let denied = NbtError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "no"));
        assert_eq!(denied.category(), ErrorCategory::Unknown);
        assert!(NbtError::NegativeLength(-1)
            .user_message(Locale::En)
            .starts_with("corrupt or unsupported save format"));
    }
}
