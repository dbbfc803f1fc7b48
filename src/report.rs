//! 汇总世界信息：文本展示与 JSON 导出

use crate::config::{Config, ExportConfig};
use crate::decoder::Document;
use crate::format::{format_epoch_ms, format_game_ticks_in, format_item_nbt_in};
use crate::lang::Locale;
use crate::nbt_json::{compound_to_generic, GenericValue};
use crate::projection::{dimension, inventory, player_position, world_info_in};
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct SpawnReport {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldSection {
    pub name: String,
    pub game_mode: String,
    pub spawn: SpawnReport,
    pub world_time_ticks: i64,
    pub last_saved_epoch_ms: i64,
    pub difficulty: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionReport {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemReport {
    pub slot: i32,
    pub item_id: String,
    pub count: i32,
    /// 物品 NBT 的通用值形式
    pub nbt: Option<GenericValue>,
    /// 物品 NBT 的可读摘要
    pub summary: String,
}

/// 一个存档的完整展示数据
#[derive(Debug, Clone, Serialize)]
pub struct WorldReport {
    pub world: WorldSection,
    pub player_position: PositionReport,
    pub dimension: String,
    pub inventory: Vec<ItemReport>,
}

impl WorldReport {
    /// 从文档构建报告，标签按 `locale` 翻译，物品 NBT 按 `export.max_depth` 转换
    pub fn build(doc: &Document, locale: Locale, export: &ExportConfig) -> Self {
        let info = world_info_in(doc, locale);
        let pos = player_position(doc);

        let inventory = inventory(doc)
            .into_iter()
            .map(|item| ItemReport {
                slot: item.slot,
                summary: format_item_nbt_in(item.tag.as_ref(), locale),
                nbt: item
                    .tag
                    .as_ref()
                    .map(|t| compound_to_generic(t, export.max_depth)),
                item_id: item.item_id,
                count: item.count,
            })
            .collect();

        Self {
            world: WorldSection {
                name: info.name,
                game_mode: info.game_mode.label(locale).to_string(),
                spawn: SpawnReport {
                    x: info.spawn.x,
                    y: info.spawn.y,
                    z: info.spawn.z,
                },
                world_time_ticks: info.world_time_ticks,
                last_saved_epoch_ms: info.last_saved_epoch_ms,
                difficulty: info.difficulty.label(locale).to_string(),
            },
            player_position: PositionReport {
                x: pos.x,
                y: pos.y,
                z: pos.z,
            },
            dimension: dimension(doc).label(locale),
            inventory,
        }
    }

    /// 渲染为多行文本
    pub fn render_text(&self, locale: Locale) -> String {
        let zh = locale == Locale::Zh;
        let label = |en: &'static str, cn: &'static str| if zh { cn } else { en };
        let w = &self.world;

        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", label("World", "世界名称"), w.name);
        let _ = writeln!(out, "  {}: {}", label("Game mode", "游戏模式"), w.game_mode);
        let _ = writeln!(
            out,
            "  {}: X={}, Y={}, Z={}",
            label("Spawn", "出生点坐标"),
            w.spawn.x,
            w.spawn.y,
            w.spawn.z
        );
        let _ = writeln!(
            out,
            "  {}: {}",
            label("World time", "世界时间"),
            format_game_ticks_in(w.world_time_ticks, locale)
        );
        let _ = writeln!(
            out,
            "  {}: {}",
            label("Last saved", "最后保存时间"),
            format_epoch_ms(w.last_saved_epoch_ms)
        );
        let _ = writeln!(out, "  {}: {}", label("Difficulty", "世界难度"), w.difficulty);
        let _ = writeln!(out, "{}: {}", label("Dimension", "所在维度"), self.dimension);
        let p = &self.player_position;
        let _ = writeln!(
            out,
            "{}: X={:.2}, Y={:.2}, Z={:.2}",
            label("Player position", "游戏角色坐标"),
            p.x,
            p.y,
            p.z
        );

        let _ = writeln!(out, "{}:", label("Inventory", "玩家背包"));
        for item in &self.inventory {
            let id = item.item_id.strip_prefix("minecraft:").unwrap_or(&item.item_id);
            let _ = writeln!(
                out,
                "  {} {}: {} x{}",
                label("Slot", "槽位"),
                item.slot,
                id,
                item.count
            );
            let _ = writeln!(out, "     NBT: {}", item.summary);
        }
        out
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// 导出世界报告为 JSON 文件
pub fn export_report(doc: &Document, output_path: &Path, config: &Config) -> Result<()> {
    let report = WorldReport::build(doc, config.display.locale, &config.export);
    write_output(output_path, &report.to_json(config.export.pretty)?)
}

/// 导出整个文档的通用值形式（根名称 + 完整树）
pub fn export_raw(doc: &Document, output_path: &Path, export: &ExportConfig) -> Result<()> {
    let value = GenericValue::Map(vec![
        (
            "root_name".to_string(),
            GenericValue::Text(doc.root_name().to_string()),
        ),
        (
            "root".to_string(),
            compound_to_generic(doc.root(), export.max_depth),
        ),
    ]);
    let output = if export.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    write_output(output_path, &output)
}

fn write_output(output_path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, content)?;
    Ok(())
}
