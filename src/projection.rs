//! 从解码后的 level.dat 中提取世界、玩家、维度与背包信息
//!
//! 所有访问函数都不会因字段缺失或类型不符而失败：各自返回约定的默认值。

use crate::decoder::Document;
use crate::lang::Locale;
use crate::tag::{Compound, Tag};
use log::debug;
use std::fmt;

/// 游戏模式（`Data.Player.playerGameType`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
    Unknown(i64),
}

impl GameMode {
    pub fn from_id(id: i64) -> Self {
        match id {
            0 => GameMode::Survival,
            1 => GameMode::Creative,
            2 => GameMode::Adventure,
            3 => GameMode::Spectator,
            other => GameMode::Unknown(other),
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let phrases = locale.phrases();
        match self {
            GameMode::Survival => phrases.game_modes[0],
            GameMode::Creative => phrases.game_modes[1],
            GameMode::Adventure => phrases.game_modes[2],
            GameMode::Spectator => phrases.game_modes[3],
            GameMode::Unknown(_) => phrases.unknown_mode,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

/// 世界难度（`Data.Difficulty`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Peaceful,
    Easy,
    Normal,
    Hard,
    Unknown(i64),
}

impl Difficulty {
    pub fn from_id(id: i64) -> Self {
        match id {
            0 => Difficulty::Peaceful,
            1 => Difficulty::Easy,
            2 => Difficulty::Normal,
            3 => Difficulty::Hard,
            other => Difficulty::Unknown(other),
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let phrases = locale.phrases();
        match self {
            Difficulty::Peaceful => phrases.difficulties[0],
            Difficulty::Easy => phrases.difficulties[1],
            Difficulty::Normal => phrases.difficulties[2],
            Difficulty::Hard => phrases.difficulties[3],
            Difficulty::Unknown(_) => phrases.unknown_difficulty,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

/// 玩家所在维度
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimension {
    Overworld,
    Nether,
    End,
    /// 未能识别的原始值
    Unknown(String),
}

impl Dimension {
    /// 识别命名空间形式、简写形式及旧版整数编号
    pub fn from_tag(tag: &Tag) -> Self {
        match tag {
            Tag::String(raw) => match raw.as_str() {
                "minecraft:overworld" | "overworld" => Dimension::Overworld,
                "minecraft:the_nether" | "nether" => Dimension::Nether,
                "minecraft:the_end" | "end" => Dimension::End,
                other => Dimension::Unknown(other.to_string()),
            },
            other => match other.as_i64() {
                Some(0) => Dimension::Overworld,
                Some(-1) => Dimension::Nether,
                Some(1) => Dimension::End,
                Some(id) => Dimension::Unknown(id.to_string()),
                None => Dimension::Unknown(other.kind().to_string()),
            },
        }
    }

    pub fn label(&self, locale: Locale) -> String {
        let phrases = locale.phrases();
        match self {
            Dimension::Overworld => phrases.overworld.to_string(),
            Dimension::Nether => phrases.nether.to_string(),
            Dimension::End => phrases.end.to_string(),
            Dimension::Unknown(raw) => format!("{}({})", phrases.unknown_dimension, raw),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(Locale::En))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnPoint {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

/// 世界基本信息
#[derive(Debug, Clone, PartialEq)]
pub struct WorldInfo {
    /// 世界名称；缺失时为 "Unknown"/"未知"
    pub name: String,
    pub game_mode: GameMode,
    pub spawn: SpawnPoint,
    pub world_time_ticks: i64,
    pub last_saved_epoch_ms: i64,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 背包中的一格物品
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub slot: i32,
    pub item_id: String,
    pub count: i32,
    pub tag: Option<Compound>,
}

impl InventoryItem {
    /// 去掉 `minecraft:` 命名空间后的物品 ID
    pub fn short_id(&self) -> &str {
        self.item_id
            .strip_prefix("minecraft:")
            .unwrap_or(&self.item_id)
    }
}

fn data(doc: &Document) -> Option<&Compound> {
    doc.root().get("Data").and_then(Tag::as_compound)
}

fn player(doc: &Document) -> Option<&Compound> {
    data(doc)?.get("Player").and_then(Tag::as_compound)
}

fn int_field(map: Option<&Compound>, name: &str) -> i64 {
    match map.and_then(|m| m.get(name)) {
        Some(tag) => tag.as_i64().unwrap_or_else(|| {
            debug!("字段 {} 类型为 {}，使用默认值 0", name, tag.kind());
            0
        }),
        None => 0,
    }
}

fn spawn_point(data: Option<&Compound>) -> SpawnPoint {
    let Some(data) = data else {
        return SpawnPoint::default();
    };
    if ["SpawnX", "SpawnY", "SpawnZ"]
        .iter()
        .any(|k| data.contains_key(k))
    {
        return SpawnPoint {
            x: int_field(Some(data), "SpawnX"),
            y: int_field(Some(data), "SpawnY"),
            z: int_field(Some(data), "SpawnZ"),
        };
    }
    let nested = data.get("Spawn").and_then(Tag::as_compound);
    SpawnPoint {
        x: int_field(nested, "X"),
        y: int_field(nested, "Y"),
        z: int_field(nested, "Z"),
    }
}

/// 世界基本信息；任何缺失字段都取默认值
pub fn world_info(doc: &Document) -> WorldInfo {
    world_info_in(doc, Locale::En)
}

/// 同 [`world_info`]，世界名称缺失时使用指定语言的占位名
pub fn world_info_in(doc: &Document, locale: Locale) -> WorldInfo {
    let data = data(doc);
    if data.is_none() {
        debug!("存档缺少 Data 标签，世界信息全部使用默认值");
    }
    let name = data
        .and_then(|d| d.get("LevelName"))
        .and_then(Tag::as_str)
        .unwrap_or(locale.phrases().unknown)
        .to_string();

    WorldInfo {
        name,
        game_mode: GameMode::from_id(int_field(player(doc), "playerGameType")),
        spawn: spawn_point(data),
        world_time_ticks: int_field(data, "Time"),
        last_saved_epoch_ms: int_field(data, "LastPlayed"),
        difficulty: Difficulty::from_id(int_field(data, "Difficulty")),
    }
}

/// 玩家坐标；`Data.Player.Pos` 不是三元数值列表时返回原点
pub fn player_position(doc: &Document) -> PlayerPosition {
    let coords = player(doc)
        .and_then(|p| p.get("Pos"))
        .and_then(Tag::as_list)
        .filter(|pos| pos.len() == 3)
        .and_then(|pos| {
            Some(PlayerPosition {
                x: pos.get(0)?.as_f64()?,
                y: pos.get(1)?.as_f64()?,
                z: pos.get(2)?.as_f64()?,
            })
        });
    coords.unwrap_or_else(|| {
        debug!("无法读取玩家坐标，使用原点");
        PlayerPosition::default()
    })
}

/// 玩家所在维度；字段缺失时为主世界
pub fn dimension(doc: &Document) -> Dimension {
    player(doc)
        .and_then(|p| p.get("Dimension"))
        .map(Dimension::from_tag)
        .unwrap_or(Dimension::Overworld)
}

/// 玩家背包，按存档中的顺序排列；没有 `id` 的条目视为空槽跳过
pub fn inventory(doc: &Document) -> Vec<InventoryItem> {
    let Some(list) = player(doc)
        .and_then(|p| p.get("Inventory"))
        .and_then(Tag::as_list)
    else {
        return Vec::new();
    };

    list.iter()
        .filter_map(Tag::as_compound)
        .filter_map(|entry| {
            let item_id = match entry.get("id")? {
                Tag::String(id) => id.clone(),
                other => other.as_i64()?.to_string(),
            };
            let slot = entry
                .get("Slot")
                .and_then(Tag::as_i64)
                .and_then(|v| i32::try_from(v).ok())
                .unwrap_or(-1);
            let count = entry
                .get("Count")
                .or_else(|| entry.get("count"))
                .and_then(Tag::as_i64)
                .and_then(|v| i32::try_from(v).ok())
                .unwrap_or(0);
            let tag = entry
                .get("tag")
                .or_else(|| entry.get("components"))
                .and_then(Tag::as_compound)
                .cloned();
            Some(InventoryItem {
                slot,
                item_id,
                count,
                tag,
            })
        })
        .collect()
}
