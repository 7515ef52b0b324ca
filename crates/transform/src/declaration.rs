use gridshim_core::{Result, TransformError};

/// 拆分单条声明为 (key, value)
///
/// - 按第一个 `:` 切分
/// - 去掉首尾空白
/// - 去掉 value 末尾的一个 `;`
///
/// value 中若还有 `:` 会原样保留在 value 里。
pub fn split_declaration(input: &str) -> Result<(&str, &str)> {
    let (key, value) = input
        .split_once(':')
        .ok_or_else(|| TransformError::MalformedDeclaration(input.to_string()))?;

    let value = value.trim();
    let value = value.strip_suffix(';').unwrap_or(value).trim_end();

    Ok((key.trim(), value))
}
