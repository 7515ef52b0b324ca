use crate::ir::create_stylesheet;
use gridshim_core::{emitter::parse_declarations, Emitter, Template};
use swc_css_ast::Stylesheet;
use swc_css_codegen::{
    writer::basic::{BasicCssWriter, BasicCssWriterConfig},
    CodeGenerator, CodegenConfig, Emit,
};

/// 生成 SWC 样式表的 emitter
///
/// 每次转换产出 `.class_name { ... }` 一条规则；
/// 批量转换的 header 框架没有声明，产出空样式表。
#[derive(Debug, Clone)]
pub struct StylesheetEmitter {
    class_name: String,
}

impl StylesheetEmitter {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
        }
    }
}

impl Emitter for StylesheetEmitter {
    type Output = Stylesheet;

    fn emit(&self, template: &Template) -> Stylesheet {
        create_stylesheet(&self.class_name, &parse_declarations(&template.render()))
    }
}

/// 使用 swc_css_codegen 生成 CSS 字符串
pub fn emit_css(stylesheet: &Stylesheet, minify: bool) -> Result<String, std::fmt::Error> {
    let mut output = String::new();

    let writer_config = BasicCssWriterConfig {
        indent_type: swc_css_codegen::writer::basic::IndentType::Space,
        indent_width: 2,
        linefeed: swc_css_codegen::writer::basic::LineFeed::LF,
    };

    let mut wr = BasicCssWriter::new(&mut output, None, writer_config);
    let mut gen = CodeGenerator::new(&mut wr, CodegenConfig { minify });

    gen.emit(stylesheet)?;

    Ok(output)
}
