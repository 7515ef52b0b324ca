use gridshim_core::{Result, TransformError};

const REPEAT_OPEN: &str = "repeat(";

/// 旧版 grid 没有对应语法的自动布局关键字
const AUTO_PLACEMENT_KEYWORDS: &[&str] = &["auto-fit", "auto-fill"];

/// 拒绝 auto-fit / auto-fill
///
/// 只做子串匹配，必须在 [`expand_repeat`] 之前调用。
pub fn reject_auto_placement(value: &str) -> Result<()> {
    match AUTO_PLACEMENT_KEYWORDS
        .iter()
        .find(|keyword| value.contains(*keyword))
    {
        Some(keyword) => {
            tracing::debug!(value, keyword, "auto placement rejected");
            Err(TransformError::UnsupportedFeature((*keyword).to_string()))
        }
        None => Ok(()),
    }
}

/// 把 `repeat(N, pattern)` 改写为 `(pattern)[N]`
///
/// 支持：
/// - 多个互不嵌套的 `repeat(...)`，各自原地替换
/// - pattern 内的嵌套括号（如 `minmax(200px, 1fr)`）原样保留
///
/// 找不到匹配的 `)` 或顶层逗号时，该处文本原样输出。
///
/// # 示例
///
/// ```
/// use gridshim_transform::repeat::expand_repeat;
///
/// assert_eq!(expand_repeat("repeat(12, 1fr 20px) 1fr"), "(1fr 20px)[12] 1fr");
/// assert_eq!(
///     expand_repeat("repeat(12, minmax(200px, 1fr))"),
///     "(minmax(200px, 1fr))[12]"
/// );
/// ```
pub fn expand_repeat(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    let mut consumed = 0;

    while let Some(idx) = rest.find(REPEAT_OPEN) {
        let (before, after) = rest.split_at(idx);
        out.push_str(before);

        let args = &after[REPEAT_OPEN.len()..];
        let is_function_start = !ends_with_ident_char(&value[..consumed + idx]);

        match parse_repeat_args(args).filter(|_| is_function_start) {
            Some(repeat) => {
                tracing::trace!(times = repeat.times, pattern = repeat.pattern, "expand repeat()");
                out.push('(');
                out.push_str(repeat.pattern);
                out.push_str(")[");
                out.push_str(repeat.times);
                out.push(']');

                let advance = idx + REPEAT_OPEN.len() + repeat.len;
                consumed += advance;
                rest = &rest[advance..];
            }
            None => {
                out.push_str(REPEAT_OPEN);
                let advance = idx + REPEAT_OPEN.len();
                consumed += advance;
                rest = &rest[advance..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// `repeat(` 之后的参数
struct RepeatArgs<'a> {
    times: &'a str,
    pattern: &'a str,
    /// 到匹配的 `)`（含）为止消耗的字节数
    len: usize,
}

/// 从 `repeat(` 之后开始扫描，跟踪括号深度找到匹配的 `)`
fn parse_repeat_args(args: &str) -> Option<RepeatArgs<'_>> {
    let mut depth = 0usize;
    let mut comma = None;

    for (i, ch) in args.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => {
                let comma = comma?;
                return Some(RepeatArgs {
                    times: args[..comma].trim(),
                    pattern: args[comma + 1..i].trim(),
                    len: i + 1,
                });
            }
            ')' => depth -= 1,
            ',' if depth == 0 && comma.is_none() => comma = Some(i),
            _ => {}
        }
    }

    None
}

/// `repeat(` 前紧挨着标识符字符时（如 `myrepeat(`）不算函数调用
fn ends_with_ident_char(s: &str) -> bool {
    s.chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
