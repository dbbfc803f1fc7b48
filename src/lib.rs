//! Minecraft 存档查看核心
//!
//! 解码 level.dat 中的 NBT 数据，并从中提取世界、玩家与背包信息

pub mod compression;
pub mod config;
pub mod decoder;
pub mod error;
pub mod format;
pub mod lang;
pub mod nbt_json;
pub mod projection;
pub mod reader;
pub mod report;
pub mod tag;

pub use compression::{decompress, Compression};
pub use config::Config;
pub use decoder::{decode, decode_raw, decode_with, load, load_with, DecodeOptions, Document};
pub use error::{ErrorCategory, NbtError, Result};
pub use format::{format_epoch_ms, format_game_ticks, format_item_nbt, roman_numeral};
pub use lang::Locale;
pub use nbt_json::{nbt_to_json, to_generic, GenericValue};
pub use projection::{
    dimension, inventory, player_position, world_info, Difficulty, Dimension, GameMode,
    InventoryItem, PlayerPosition, SpawnPoint, WorldInfo,
};
pub use reader::BinaryReader;
pub use report::{export_raw, export_report, WorldReport};
pub use tag::{Compound, List, Tag, TagKind};
