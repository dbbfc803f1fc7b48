//! NBT 到通用值模型的转换，以及 JSON 输出

use crate::tag::{Compound, Tag};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

/// 导出时默认的最大递归深度
pub const DEFAULT_EXPORT_DEPTH: usize = 32;

/// 超出深度时的占位文本
pub const DEPTH_PLACEHOLDER: &str = "...";

/// 与 NBT 类型系统解耦的通用值，仅用于导出
#[derive(Debug, Clone, PartialEq)]
pub enum GenericValue {
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<GenericValue>),
    /// 保持插入顺序的映射
    Map(Vec<(String, GenericValue)>),
    /// 无法用上述类型表达的值（如超出深度）
    Fallback(String),
}

/// 将标签递归转换为通用值；剩余深度为 0 时返回占位值
pub fn to_generic(tag: &Tag, max_depth: usize) -> GenericValue {
    if max_depth == 0 {
        return GenericValue::Fallback(DEPTH_PLACEHOLDER.to_string());
    }
    let depth = max_depth - 1;
    match tag {
        Tag::Byte(v) => GenericValue::Int(i64::from(*v)),
        Tag::Short(v) => GenericValue::Int(i64::from(*v)),
        Tag::Int(v) => GenericValue::Int(i64::from(*v)),
        Tag::Long(v) => GenericValue::Int(*v),
        Tag::Float(v) => GenericValue::Float(f64::from(*v)),
        Tag::Double(v) => GenericValue::Float(*v),
        Tag::String(s) => GenericValue::Text(s.clone()),
        Tag::ByteArray(arr) => array_to_generic(arr.iter().map(|&v| i64::from(v)), depth),
        Tag::IntArray(arr) => array_to_generic(arr.iter().map(|&v| i64::from(v)), depth),
        Tag::LongArray(arr) => array_to_generic(arr.iter().copied(), depth),
        Tag::List(list) => GenericValue::List(list.iter().map(|t| to_generic(t, depth)).collect()),
        Tag::Compound(map) => compound_to_generic(map, max_depth),
    }
}

/// 将 Compound 转换为有序映射
pub fn compound_to_generic(map: &Compound, max_depth: usize) -> GenericValue {
    if max_depth == 0 {
        return GenericValue::Fallback(DEPTH_PLACEHOLDER.to_string());
    }
    GenericValue::Map(
        map.iter()
            .map(|(k, v)| (k.to_string(), to_generic(v, max_depth - 1)))
            .collect(),
    )
}

fn array_to_generic(values: impl Iterator<Item = i64>, depth: usize) -> GenericValue {
    GenericValue::List(
        values
            .map(|v| {
                if depth == 0 {
                    GenericValue::Fallback(DEPTH_PLACEHOLDER.to_string())
                } else {
                    GenericValue::Int(v)
                }
            })
            .collect(),
    )
}

impl Serialize for GenericValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GenericValue::Int(v) => serializer.serialize_i64(*v),
            // NaN / 无穷大无法用 JSON 数字表示
            GenericValue::Float(v) if !v.is_finite() => serializer.serialize_str(&v.to_string()),
            GenericValue::Float(v) => serializer.serialize_f64(*v),
            GenericValue::Text(s) | GenericValue::Fallback(s) => serializer.serialize_str(s),
            GenericValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            GenericValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in entries {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// 将通用值转换为 serde_json 值
pub fn generic_to_json(value: &GenericValue) -> JsonValue {
    match value {
        GenericValue::Int(v) => JsonValue::Number((*v).into()),
        GenericValue::Float(v) => match serde_json::Number::from_f64(*v) {
            Some(n) => JsonValue::Number(n),
            None => JsonValue::String(v.to_string()),
        },
        GenericValue::Text(s) | GenericValue::Fallback(s) => JsonValue::String(s.clone()),
        GenericValue::List(items) => JsonValue::Array(items.iter().map(generic_to_json).collect()),
        GenericValue::Map(entries) => {
            let obj: Map<String, JsonValue> = entries
                .iter()
                .map(|(k, v)| (k.clone(), generic_to_json(v)))
                .collect();
            JsonValue::Object(obj)
        }
    }
}

/// 标签直接转换为 JSON
pub fn nbt_to_json(tag: &Tag, max_depth: usize) -> JsonValue {
    generic_to_json(&to_generic(tag, max_depth))
}
