//! 显示语言与固定查找表

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 显示语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

/// 一种语言下的全部界面短语
#[derive(Debug)]
pub struct Phrases {
    pub unknown: &'static str,
    pub game_modes: [&'static str; 4],
    pub unknown_mode: &'static str,
    pub difficulties: [&'static str; 4],
    pub unknown_difficulty: &'static str,
    pub overworld: &'static str,
    pub nether: &'static str,
    pub end: &'static str,
    pub unknown_dimension: &'static str,
    pub day: &'static str,
    pub hour: &'static str,
    pub minute: &'static str,
    pub item_name: &'static str,
    pub enchantments: &'static str,
    pub count: &'static str,
    pub no_nbt: &'static str,
    pub file_not_found: &'static str,
    pub corrupt_save: &'static str,
    pub unknown_error: &'static str,
}

static EN: Phrases = Phrases {
    unknown: "Unknown",
    game_modes: ["Survival", "Creative", "Adventure", "Spectator"],
    unknown_mode: "Unknown mode",
    difficulties: ["Peaceful", "Easy", "Normal", "Hard"],
    unknown_difficulty: "Unknown difficulty",
    overworld: "Overworld",
    nether: "Nether",
    end: "End",
    unknown_dimension: "Unknown dimension",
    day: "day",
    hour: "hour",
    minute: "minute",
    item_name: "Name",
    enchantments: "Enchantments",
    count: "Count",
    no_nbt: "no NBT data",
    file_not_found: "save file not found",
    corrupt_save: "corrupt or unsupported save format",
    unknown_error: "unknown error",
};

static ZH: Phrases = Phrases {
    unknown: "未知",
    game_modes: ["生存模式", "创造模式", "冒险模式", "旁观者模式"],
    unknown_mode: "未知模式",
    difficulties: ["和平", "简单", "普通", "困难"],
    unknown_difficulty: "未知难度",
    overworld: "主世界",
    nether: "下界",
    end: "末地",
    unknown_dimension: "未知维度",
    day: "天",
    hour: "小时",
    minute: "分钟",
    item_name: "名称",
    enchantments: "附魔",
    count: "数量",
    no_nbt: "无 NBT 数据",
    file_not_found: "找不到 level.dat 文件！",
    corrupt_save: "存档已损坏或格式不支持",
    unknown_error: "发生未知错误",
};

impl Locale {
    pub fn phrases(self) -> &'static Phrases {
        match self {
            Locale::En => &EN,
            Locale::Zh => &ZH,
        }
    }
}

/// 附魔 ID（不含命名空间）-> (英文名, 中文名)
static ENCHANTMENTS: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        ("sharpness", ("Sharpness", "锋利")),
        ("sweeping", ("Sweeping Edge", "横扫之刃")),
        ("sweeping_edge", ("Sweeping Edge", "横扫之刃")),
        ("unbreaking", ("Unbreaking", "耐久")),
        ("efficiency", ("Efficiency", "效率")),
        ("fortune", ("Fortune", "时运")),
        ("silk_touch", ("Silk Touch", "精准采集")),
        ("power", ("Power", "力量")),
        ("punch", ("Punch", "冲击")),
        ("flame", ("Flame", "火矢")),
        ("infinity", ("Infinity", "无限")),
        ("protection", ("Protection", "保护")),
        ("fire_protection", ("Fire Protection", "防火")),
        ("feather_falling", ("Feather Falling", "摔落保护")),
        ("blast_protection", ("Blast Protection", "爆炸保护")),
        ("projectile_protection", ("Projectile Protection", "投射物保护")),
        ("respiration", ("Respiration", "水下呼吸")),
        ("aqua_affinity", ("Aqua Affinity", "水下速掘")),
        ("thorns", ("Thorns", "荆棘")),
        ("depth_strider", ("Depth Strider", "深海探索者")),
        ("frost_walker", ("Frost Walker", "冰霜行者")),
        ("binding_curse", ("Curse of Binding", "绑定诅咒")),
        ("vanishing_curse", ("Curse of Vanishing", "消失诅咒")),
        ("lure", ("Lure", "诱饵")),
        ("luck_of_the_sea", ("Luck of the Sea", "海之眷顾")),
        ("mending", ("Mending", "经验修补")),
        ("soul_speed", ("Soul Speed", "灵魂疾走")),
        ("swift_sneak", ("Swift Sneak", "迅捷潜行")),
        ("impaling", ("Impaling", "穿刺")),
        ("riptide", ("Riptide", "激流")),
        ("channeling", ("Channeling", "引雷")),
        ("multishot", ("Multishot", "多重射击")),
        ("quick_charge", ("Quick Charge", "快速装填")),
        ("piercing", ("Piercing", "穿透")),
        ("loyalty", ("Loyalty", "忠诚")),
        ("snipe", ("Snipe", "狙击弓步")),
        ("blessing", ("Blessing", "祝福")),
        ("regality", ("Regality", "王者")),
        ("bane_of_arthropods", ("Bane of Arthropods", "节肢杀手")),
        ("smite", ("Smite", "亡灵杀手")),
        ("looting", ("Looting", "抢夺")),
        ("knockback", ("Knockback", "击退")),
        ("fire_aspect", ("Fire Aspect", "火焰附加")),
    ])
});

/// 翻译附魔 ID；ID 不区分大小写，可带 `minecraft:` 前缀。未收录的 ID 原样返回去掉命名空间后的部分
pub fn enchantment_name(id: &str, locale: Locale) -> String {
    let bare = id.to_lowercase().replace("minecraft:", "");
    match ENCHANTMENTS.get(bare.as_str()) {
        Some((en, zh)) => match locale {
            Locale::En => en.to_string(),
            Locale::Zh => zh.to_string(),
        },
        None => bare,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enchantment_lookup() {
        assert_eq!(enchantment_name("minecraft:sharpness", Locale::En), "Sharpness");
        assert_eq!(enchantment_name("MINECRAFT:Sharpness", Locale::Zh), "锋利");
        assert_eq!(enchantment_name("unbreaking", Locale::Zh), "耐久");
        assert_eq!(enchantment_name("mymod:lifesteal", Locale::En), "mymod:lifesteal");
        assert_eq!(enchantment_name("minecraft:unknown_thing", Locale::En), "unknown_thing");
    }

    #[test]
    fn locale_parses_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let w: Wrapper = toml::from_str("locale = \"zh\"").unwrap();
        assert_eq!(w.locale, Locale::Zh);
        assert_eq!(Locale::default(), Locale::En);
    }
}
