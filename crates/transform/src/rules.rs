use crate::repeat::{expand_repeat, reject_auto_placement};
use gridshim_core::{Result, Template};
use phf::phf_map;

/// 改写规则：trim 后的 value → 模板
pub type Rule = fn(&str) -> Result<Template>;

/// 属性名 → 改写规则（大小写敏感，精确匹配）
static RULES: phf::Map<&'static str, Rule> = phf_map! {
    "display" => display as Rule,
    "grid-column" => grid_column as Rule,
    "grid-row" => grid_row as Rule,
    "grid-template-columns" => grid_template_columns as Rule,
    "grid-template-rows" => grid_template_rows as Rule,
    "align-self" => align_self as Rule,
    "justify-self" => justify_self as Rule,
};

/// 查找属性对应的规则
pub fn lookup(property: &str) -> Option<Rule> {
    RULES.get(property).copied()
}

/// 所有支持的属性名
pub fn supported_properties() -> impl Iterator<Item = &'static str> {
    RULES.keys().copied()
}

fn display(value: &str) -> Result<Template> {
    if value == "grid" {
        return Ok(Template::literal("display:-ms-grid;display:grid;"));
    }
    Ok(Template::new(vec!["display:", ";"], vec![value.to_string()]))
}

fn grid_column(value: &str) -> Result<Template> {
    let (start, span) = placement(value);
    Ok(Template::new(
        vec![
            "-ms-grid-column:",
            ";-ms-grid-column-span:",
            ";grid-column:",
            ";",
        ],
        vec![start, span, value.to_string()],
    ))
}

fn grid_row(value: &str) -> Result<Template> {
    let (start, span) = placement(value);
    Ok(Template::new(
        vec!["-ms-grid-row:", ";-ms-grid-row-span:", ";grid-row:", ";"],
        vec![start, span, value.to_string()],
    ))
}

fn grid_template_columns(value: &str) -> Result<Template> {
    reject_auto_placement(value)?;
    Ok(Template::new(
        vec!["-ms-grid-columns:", ";grid-template-columns:", ";"],
        vec![expand_repeat(value), value.to_string()],
    ))
}

fn grid_template_rows(value: &str) -> Result<Template> {
    reject_auto_placement(value)?;
    Ok(Template::new(
        vec!["-ms-grid-rows:", ";grid-template-rows:", ";"],
        vec![expand_repeat(value), value.to_string()],
    ))
}

fn align_self(value: &str) -> Result<Template> {
    Ok(Template::new(
        vec!["-ms-grid-row-align:", ";align-self:", ";"],
        vec![value.to_string(), value.to_string()],
    ))
}

fn justify_self(value: &str) -> Result<Template> {
    Ok(Template::new(
        vec!["-ms-grid-column-align:", ";justify-self:", ";"],
        vec![value.to_string(), value.to_string()],
    ))
}

/// 解析 `start` 或 `start / end`，返回 (start, span)
///
/// 有 end 时 span = end - start（数值相减），否则为 "1"。
/// 只取前两段：`1 / 2 / 3` 按 `1 / 2` 计算。
/// 任一侧不是数字（如 `span 2`）时结果为 "NaN"。
fn placement(value: &str) -> (String, String) {
    let mut parts = value.split('/').map(str::trim);
    let start = parts.next().unwrap_or_default();
    let end = parts.next().unwrap_or_default();

    let span = if end.is_empty() {
        "1".to_string()
    } else {
        format_number(to_number(end) - to_number(start))
    };

    (start.to_string(), span)
}

/// 字符串 → 数字，规则同 JS 的 `Number()`
///
/// - 空串为 0
/// - `Infinity` / `+Infinity` / `-Infinity`（大小写敏感）
/// - `0x` / `0o` / `0b` 前缀整数（不带符号）
/// - 其余十进制写法；`inf`、`nan` 等不认
fn to_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u128::from_str_radix(&s[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    let decimal = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal {
        return f64::NAN;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// 数字 → 字符串，规则同 JS 的 `String(number)`
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 按 0 输出
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return n.to_string();
    }

    // 指数形式：1e21 → "1e+21"，1.5e-7 → "1.5e-7"
    let exp = format!("{:e}", n);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}
