use crate::types::{Declaration, Template};
use serde::{Deserialize, Serialize};

/// 输出组合器
///
/// 接收一次转换产生的模板，返回调用方决定的任意类型。
/// 转换器不关心返回值，原样交还给调用方。
///
/// 闭包 `Fn(&Template) -> T` 自动实现该 trait：
///
/// ```
/// use gridshim_core::{Emitter, Template};
///
/// let upper = |t: &Template| t.render().to_uppercase();
/// assert_eq!(upper.emit(&Template::literal("display:grid;")), "DISPLAY:GRID;");
/// ```
pub trait Emitter {
    type Output;

    fn emit(&self, template: &Template) -> Self::Output;
}

impl<F, T> Emitter for F
where
    F: Fn(&Template) -> T,
{
    type Output = T;

    fn emit(&self, template: &Template) -> T {
        self(template)
    }
}

/// 原样返回模板（测试与调试用）
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Emitter for Raw {
    type Output = Template;

    fn emit(&self, template: &Template) -> Template {
        template.clone()
    }
}

/// CSS 文本输出选项
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssTextOptions {
    /// 紧凑输出 `prop:value;`（默认 false，每行一条 `prop: value;`）
    #[serde(default)]
    pub minify: bool,
}

/// 渲染为 CSS 文本
#[derive(Debug, Clone, Copy, Default)]
pub struct CssText {
    pub options: CssTextOptions,
}

impl CssText {
    pub fn new(options: CssTextOptions) -> Self {
        Self { options }
    }

    pub fn minified() -> Self {
        Self::new(CssTextOptions { minify: true })
    }
}

impl Emitter for CssText {
    type Output = String;

    fn emit(&self, template: &Template) -> String {
        let decls = parse_declarations(&template.render());
        if self.options.minify {
            decls
                .iter()
                .map(|d| format!("{}:{};", d.property, d.value))
                .collect()
        } else {
            decls.iter().map(|d| format!("{}\n", d)).collect()
        }
    }
}

/// 拆分为结构化声明列表
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationList;

impl Emitter for DeclarationList {
    type Output = Vec<Declaration>;

    fn emit(&self, template: &Template) -> Vec<Declaration> {
        parse_declarations(&template.render())
    }
}

/// 把 `a:b;c:d;` 形式的文本拆成声明
///
/// 只按 `;` 和第一个 `:` 切分，空片段跳过。
pub fn parse_declarations(css: &str) -> Vec<Declaration> {
    css.split(';')
        .filter_map(|piece| {
            let (property, value) = piece.split_once(':')?;
            let property = property.trim();
            if property.is_empty() {
                return None;
            }
            Some(Declaration::new(property, value.trim()))
        })
        .collect()
}
