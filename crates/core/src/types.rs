use serde::{Deserialize, Serialize};
use std::fmt;

/// CSS 声明
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    /// CSS 属性名（如 "-ms-grid-columns"）
    pub property: String,
    /// CSS 属性值（如 "(1fr)[12]"）
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// 模板：一次 emitter 调用的全部参数
///
/// 字面量片段与替换值交错排列，始终满足
/// `literals.len() == substitutions.len() + 1`。
///
/// # 示例
///
/// ```
/// use gridshim_core::Template;
///
/// let t = Template::new(
///     vec!["-ms-grid-row-align:", ";align-self:", ";"],
///     vec!["center".to_string(), "center".to_string()],
/// );
/// assert_eq!(t.render(), "-ms-grid-row-align:center;align-self:center;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Template {
    literals: Vec<&'static str>,
    substitutions: Vec<String>,
}

impl Template {
    /// 创建模板
    ///
    /// # Panics
    ///
    /// `literals.len() != substitutions.len() + 1` 时 panic。
    pub fn new(literals: Vec<&'static str>, substitutions: Vec<String>) -> Self {
        assert_eq!(
            literals.len(),
            substitutions.len() + 1,
            "template needs exactly one more literal than substitutions"
        );
        Self {
            literals,
            substitutions,
        }
    }

    /// 只有一个字面量、没有替换值的模板
    pub fn literal(text: &'static str) -> Self {
        Self::new(vec![text], Vec::new())
    }

    /// 批量转换使用的空框架：`slots + 1` 个空字面量，`slots` 个空占位
    pub fn frame(slots: usize) -> Self {
        Self::new(vec![""; slots + 1], vec![String::new(); slots])
    }

    pub fn literals(&self) -> &[&'static str] {
        &self.literals
    }

    pub fn substitutions(&self) -> &[String] {
        &self.substitutions
    }

    /// 依次拼接字面量与替换值
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, literal) in self.literals.iter().enumerate() {
            out.push_str(literal);
            if let Some(sub) = self.substitutions.get(i) {
                out.push_str(sub);
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
