//! 显示辅助：游戏时间、现实时间、罗马数字、物品 NBT 摘要

use crate::lang::{enchantment_name, Locale};
use crate::tag::{Compound, Tag};

/// 一个游戏日的 tick 数
pub const TICKS_PER_DAY: i64 = 24_000;
const TICKS_PER_HOUR: i64 = 1_000;

/// 将游戏 tick 转换为 "N day N hour N minute"
pub fn format_game_ticks(ticks: i64) -> String {
    format_game_ticks_in(ticks, Locale::En)
}

pub fn format_game_ticks_in(ticks: i64, locale: Locale) -> String {
    let phrases = locale.phrases();
    let days = ticks.div_euclid(TICKS_PER_DAY);
    let remaining = ticks.rem_euclid(TICKS_PER_DAY);
    let hours = remaining / TICKS_PER_HOUR;
    let minutes = (remaining % TICKS_PER_HOUR) * 60 / TICKS_PER_HOUR;
    format!(
        "{} {} {} {} {} {}",
        days, phrases.day, hours, phrases.hour, minutes, phrases.minute
    )
}

/// 将毫秒时间戳格式化为 `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_epoch_ms(ms: i64) -> String {
    let secs = ms.div_euclid(1000);
    let days = secs.div_euclid(86_400);
    let secs_of_day = secs.rem_euclid(86_400);
    let (year, month, day) = civil_from_days(days);
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02} UTC",
        year,
        month,
        day,
        secs_of_day / 3600,
        secs_of_day % 3600 / 60,
        secs_of_day % 60
    )
}

/// 1970-01-01 起的天数 -> 公历 (年, 月, 日)
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

const ROMAN: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// 罗马数字能表示的上限（不含）
pub const ROMAN_LIMIT: i64 = 4000;

/// 罗马数字；n <= 0 时返回 "I"，n >= 4000 时返回十进制文本
pub fn roman_numeral(n: i64) -> String {
    if n >= ROMAN_LIMIT {
        return n.to_string();
    }
    let mut n = n;
    let mut out = String::new();
    for (value, symbol) in ROMAN {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    if out.is_empty() {
        out.push('I');
    }
    out
}

/// 物品 NBT 摘要：自定义名称、附魔、数量
pub fn format_item_nbt(tag: Option<&Compound>) -> String {
    format_item_nbt_in(tag, Locale::En)
}

pub fn format_item_nbt_in(tag: Option<&Compound>, locale: Locale) -> String {
    let phrases = locale.phrases();
    let Some(tag) = tag else {
        return phrases.no_nbt.to_string();
    };

    let mut parts = Vec::new();

    if let Some(name) = tag
        .get_path(&["display", "Name"])
        .and_then(Tag::as_str)
    {
        parts.push(format!("{}: '{}'", phrases.item_name, name));
    }

    if let Some(list) = tag.get("Enchantments").and_then(Tag::as_list) {
        let enchantments: Vec<String> = list
            .iter()
            .filter_map(Tag::as_compound)
            .map(|e| {
                let id = match e.get("id") {
                    Some(Tag::String(s)) => s.clone(),
                    Some(other) => other
                        .as_i64()
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| phrases.unknown.to_string()),
                    None => phrases.unknown.to_string(),
                };
                let level = e.get("lvl").and_then(Tag::as_i64).unwrap_or(0);
                format!("{} {}", enchantment_name(&id, locale), roman_numeral(level))
            })
            .collect();
        if !enchantments.is_empty() {
            parts.push(format!("{}: {}", phrases.enchantments, enchantments.join(", ")));
        }
    }

    if let Some(count) = tag.get("Count") {
        let rendered = match count {
            Tag::Float(_) | Tag::Double(_) => count.as_f64().map(|v| v.to_string()),
            other => other.as_i64().map(|v| v.to_string()),
        };
        if let Some(rendered) = rendered {
            parts.push(format!("{}: {}", phrases.count, rendered));
        }
    }

    if parts.is_empty() {
        phrases.no_nbt.to_string()
    } else {
        parts.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::{List, TagKind};

    #[test]
    fn game_ticks() {
        assert_eq!(format_game_ticks(0), "0 day 0 hour 0 minute");
        assert_eq!(format_game_ticks(24000), "1 day 0 hour 0 minute");
        assert_eq!(format_game_ticks(25500), "1 day 1 hour 30 minute");
        assert_eq!(format_game_ticks(999), "0 day 0 hour 59 minute");
        assert_eq!(format_game_ticks_in(25500, Locale::Zh), "1 天 1 小时 30 分钟");
    }

    #[test]
    fn epoch_ms() {
        assert_eq!(format_epoch_ms(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_epoch_ms(1_700_000_000_123), "2023-11-14 22:13:20 UTC");
        assert_eq!(format_epoch_ms(951_782_400_000), "2000-02-29 00:00:00 UTC");
        assert_eq!(format_epoch_ms(-1000), "1969-12-31 23:59:59 UTC");
    }

    #[test]
    fn roman() {
        assert_eq!(roman_numeral(1), "I");
        assert_eq!(roman_numeral(4), "IV");
        assert_eq!(roman_numeral(9), "IX");
        assert_eq!(roman_numeral(1994), "MCMXCIV");
        assert_eq!(roman_numeral(0), "I");
        assert_eq!(roman_numeral(-5), "I");
        assert_eq!(roman_numeral(3999), "MMMCMXCIX");
        assert_eq!(roman_numeral(4000), "4000");
        assert_eq!(roman_numeral(i64::MAX), i64::MAX.to_string());
    }

    fn enchantment(id: &str, lvl: i16) -> Tag {
        let mut e = Compound::new();
        e.insert("id", Tag::String(id.to_string()));
        e.insert("lvl", Tag::Short(lvl));
        Tag::Compound(e)
    }

    #[test]
    fn item_nbt_summary() {
        let mut display = Compound::new();
        display.insert("Name", Tag::String("Excalibur".to_string()));

        let mut tag = Compound::new();
        tag.insert("display", Tag::Compound(display));
        tag.insert(
            "Enchantments",
            Tag::List(
                List::from_tags(
                    TagKind::Compound,
                    vec![
                        enchantment("minecraft:sharpness", 5),
                        enchantment("mymod:lifesteal", 2),
                    ],
                )
                .unwrap(),
            ),
        );
        tag.insert("Count", Tag::Byte(3));

        assert_eq!(
            format_item_nbt(Some(&tag)),
            "Name: 'Excalibur' | Enchantments: Sharpness V, mymod:lifesteal II | Count: 3"
        );
        assert_eq!(
            format_item_nbt_in(Some(&tag), Locale::Zh),
            "名称: 'Excalibur' | 附魔: 锋利 V, mymod:lifesteal II | 数量: 3"
        );
    }

    #[test]
    fn item_nbt_sentinel() {
        assert_eq!(format_item_nbt(None), "no NBT data");
        let mut tag = Compound::new();
        tag.insert("Damage", Tag::Int(4));
        assert_eq!(format_item_nbt(Some(&tag)), "no NBT data");
        assert_eq!(format_item_nbt_in(None, Locale::Zh), "无 NBT 数据");
    }
}
