pub mod declaration;
pub mod repeat;
pub mod rules;

use std::fmt;

use declaration::split_declaration;
use gridshim_core::{Result, Template, TransformError};

// Re-exports
pub use gridshim_core::{
    CssText, CssTextOptions, Declaration, DeclarationList, Emitter, Raw,
};
pub use rules::supported_properties;

/// 把单条声明翻译成模板（不经过 emitter）
///
/// # 示例
///
/// ```
/// use gridshim_transform::lower;
///
/// let t = lower("grid-template-columns: repeat(12, 1fr 20px) 1fr").unwrap();
/// assert_eq!(t.substitutions(), &["(1fr 20px)[12] 1fr", "repeat(12, 1fr 20px) 1fr"]);
/// ```
pub fn lower(declaration: &str) -> Result<Template> {
    let (key, value) = split_declaration(declaration)?;

    let Some(rule) = rules::lookup(key) else {
        tracing::debug!(key, "unsupported grid property");
        return Err(TransformError::UnsupportedProperty(key.to_string()));
    };

    tracing::debug!(key, value, "transforming declaration");
    rule(value)
}

/// 声明转换器
///
/// 持有调用方提供的 emitter，本身无状态：
/// 同一输入多次调用得到相同结果。
///
/// # 示例
///
/// ```
/// use gridshim_transform::{CssText, Transformer};
///
/// let transformer = Transformer::new(CssText::minified());
/// let css = transformer.transform("justify-self: center").unwrap();
/// assert_eq!(css, "-ms-grid-column-align:center;justify-self:center;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transformer<E> {
    emitter: E,
}

impl<E: Emitter> Transformer<E> {
    pub fn new(emitter: E) -> Self {
        Self { emitter }
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// 转换单条声明
    pub fn transform(&self, declaration: &str) -> Result<E::Output> {
        let template = lower(declaration)?;
        Ok(self.emitter.emit(&template))
    }

    /// 批量转换
    ///
    /// 先转换全部声明（任一失败则整体失败，不产生部分结果），
    /// 再用空框架模板调用一次 emitter 作为 header。
    pub fn all<I>(&self, declarations: I) -> Result<Batch<E::Output>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let items = declarations
            .into_iter()
            .map(|decl| self.transform(decl.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(count = items.len(), "transformed batch");

        let header = self.emitter.emit(&Template::frame(items.len()));
        Ok(Batch { header, items })
    }
}

/// 批量转换结果：header 框架 + 每条声明的结果（保持输入顺序）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch<T> {
    pub header: T,
    pub items: Vec<T>,
}

impl<T> Batch<T> {
    /// 元素总数（header 也计入）
    pub fn len(&self) -> usize {
        self.items.len() + 1
    }

    /// 展开为 `[header, item...]`
    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.header);
        out.extend(self.items);
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::once(&self.header).chain(self.items.iter())
    }
}

impl<T> IntoIterator for Batch<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// 按顺序拼接所有片段
impl<T: fmt::Display> fmt::Display for Batch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.iter() {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
