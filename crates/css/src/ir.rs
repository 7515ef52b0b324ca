use gridshim_core::Declaration;
use swc_common::DUMMY_SP;
use swc_css_ast::{
    ClassSelector, ComplexSelector, ComplexSelectorChildren, ComponentValue, CompoundSelector,
    Declaration as SwcDeclaration, DeclarationName, Dimension, Ident, Length, Number,
    QualifiedRule, QualifiedRulePrelude, Rule, SelectorList, SimpleBlock, Stylesheet,
    SubclassSelector, Token, TokenAndSpan,
};

/// 单位
const UNITS: &[&str] = &[
    "px", "rem", "em", "vh", "vw", "vmin", "vmax", "%", "pt", "pc", "in", "cm", "mm", "ch",
    "ex",
];

/// 声明值 → ComponentValue
///
/// 单个长度（`10px`、`2rem`）生成 Length，其余（轨道列表、`(1fr)[12]` 等）
/// 整体作为带 raw 的 Ident，codegen 时原样输出。
fn to_component_value(value: &str) -> ComponentValue {
    let trimmed = value.trim();

    if let Some((num, unit)) = split_dimension(trimmed) {
        if let Ok(parsed) = num.parse::<f64>() {
            return ComponentValue::Dimension(Box::new(Dimension::Length(Length {
                span: DUMMY_SP,
                value: Number {
                    span: DUMMY_SP,
                    value: parsed,
                    raw: Some(num.into()),
                },
                unit: Ident {
                    span: DUMMY_SP,
                    value: unit.into(),
                    raw: None,
                },
            })));
        }
    }

    ComponentValue::Ident(Box::new(Ident {
        span: DUMMY_SP,
        value: trimmed.into(),
        raw: Some(trimmed.into()),
    }))
}

/// `10px` → ("10", "px")
fn split_dimension(s: &str) -> Option<(&str, &str)> {
    UNITS.iter().find_map(|unit| {
        let num = s.strip_suffix(unit)?;
        let valid = !num.is_empty()
            && num.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-');
        valid.then_some((num, *unit))
    })
}

/// gridshim Declaration → SWC Declaration
pub fn create_swc_declaration(decl: &Declaration) -> SwcDeclaration {
    SwcDeclaration {
        span: DUMMY_SP,
        name: DeclarationName::Ident(Ident {
            span: DUMMY_SP,
            value: decl.property.as_str().into(),
            raw: None,
        }),
        value: vec![to_component_value(&decl.value)],
        important: None,
    }
}

fn class_selector(class_name: &str) -> ComplexSelector {
    let compound = CompoundSelector {
        span: DUMMY_SP,
        nesting_selector: None,
        type_selector: None,
        subclass_selectors: vec![SubclassSelector::Class(ClassSelector {
            span: DUMMY_SP,
            text: Ident {
                span: DUMMY_SP,
                value: class_name.into(),
                raw: None,
            },
        })],
    };

    ComplexSelector {
        span: DUMMY_SP,
        children: vec![ComplexSelectorChildren::CompoundSelector(compound)],
    }
}

/// `.class_name { ...declarations }`
pub fn create_qualified_rule(class_name: &str, declarations: &[Declaration]) -> QualifiedRule {
    let block = SimpleBlock {
        span: DUMMY_SP,
        name: TokenAndSpan {
            span: DUMMY_SP,
            token: Token::LBrace,
        },
        value: declarations
            .iter()
            .map(|decl| ComponentValue::Declaration(Box::new(create_swc_declaration(decl))))
            .collect(),
    };

    QualifiedRule {
        span: DUMMY_SP,
        prelude: QualifiedRulePrelude::SelectorList(SelectorList {
            span: DUMMY_SP,
            children: vec![class_selector(class_name)],
        }),
        block,
    }
}

/// 单条规则的样式表；没有声明时为空样式表
pub fn create_stylesheet(class_name: &str, declarations: &[Declaration]) -> Stylesheet {
    let rules = if declarations.is_empty() {
        Vec::new()
    } else {
        vec![Rule::QualifiedRule(Box::new(create_qualified_rule(
            class_name,
            declarations,
        )))]
    };

    Stylesheet {
        span: DUMMY_SP,
        rules,
    }
}

/// 合并多个样式表（按顺序）
pub fn merge_stylesheets(stylesheets: impl IntoIterator<Item = Stylesheet>) -> Stylesheet {
    Stylesheet {
        span: DUMMY_SP,
        rules: stylesheets.into_iter().flat_map(|s| s.rules).collect(),
    }
}
