use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use gridshim_core::{Template, TransformError};
use gridshim_transform::{lower, CssText, CssTextOptions, Emitter, Transformer};

// ── JS tag 函数 emitter ───────────────────────────────────────

/// 以 `css(literals, ...substitutions)` 形式调用 JS 函数
struct JsEmitter {
    css: Function,
}

impl JsEmitter {
    fn call(
        &self,
        literals: Array,
        substitutions: impl IntoIterator<Item = JsValue>,
    ) -> Result<JsValue, JsValue> {
        let args = Array::new();
        args.push(&literals);
        for sub in substitutions {
            args.push(&sub);
        }
        self.css.apply(&JsValue::NULL, &args)
    }
}

impl Emitter for JsEmitter {
    type Output = Result<JsValue, JsValue>;

    fn emit(&self, template: &Template) -> Self::Output {
        let literals: Array = template
            .literals()
            .iter()
            .map(|s| JsValue::from_str(s))
            .collect();
        let subs = template.substitutions().iter().map(|s| JsValue::from_str(s));
        self.call(literals, subs)
    }
}

fn to_js_error(err: TransformError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn parse_options(options: JsValue) -> Result<CssTextOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(CssTextOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

// ── WASM 导出 ─────────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 持有 JS tag 函数的转换器
#[wasm_bindgen]
pub struct GridTransformer {
    inner: Transformer<JsEmitter>,
}

#[wasm_bindgen]
impl GridTransformer {
    /// 转换单条声明，返回 `css` 的返回值
    pub fn transform(&self, declaration: &str) -> Result<JsValue, JsValue> {
        self.inner.transform(declaration).map_err(to_js_error)?
    }

    /// 批量转换
    ///
    /// 先逐条转换，再以 `n + 1` 个空字面量和各条结果调用一次 `css`，
    /// 返回这次调用的结果。任一声明失败则整体抛错。
    pub fn all(&self, declarations: Vec<String>) -> Result<JsValue, JsValue> {
        let templates = declarations
            .iter()
            .map(|decl| lower(decl))
            .collect::<Result<Vec<_>, _>>()
            .map_err(to_js_error)?;

        let emitter = self.inner.emitter();
        let results = templates
            .iter()
            .map(|t| emitter.emit(t))
            .collect::<Result<Vec<_>, _>>()?;

        let frame: Array = Template::frame(results.len())
            .literals()
            .iter()
            .map(|s| JsValue::from_str(s))
            .collect();
        emitter.call(frame, results)
    }
}

/// 创建转换器
///
/// @param css - tag 函数 `(literals, ...substitutions) => any`
/// @throws 当 `css` 不是函数时
#[wasm_bindgen(js_name = "createTransformer")]
pub fn create_transformer(css: JsValue) -> Result<GridTransformer, JsError> {
    let css = css.dyn_into::<Function>().map_err(|_| {
        let err = TransformError::InvalidConfiguration(
            "Argument \"css\" must be a valid function.".to_string(),
        );
        JsError::new(&err.to_string())
    })?;

    Ok(GridTransformer {
        inner: Transformer::new(JsEmitter { css }),
    })
}

/// 转换单条声明为 CSS 文本
///
/// @param declaration - 如 `"grid-template-columns: repeat(12, 1fr)"`
/// @param options     - `{ minify?: boolean }`，可选
#[wasm_bindgen(js_name = "transformCss")]
pub fn transform_css(declaration: &str, options: JsValue) -> Result<String, JsError> {
    let transformer = Transformer::new(CssText::new(parse_options(options)?));
    transformer
        .transform(declaration)
        .map_err(|e| JsError::new(&e.to_string()))
}

/// 批量转换为 CSS 文本（按输入顺序拼接）
#[wasm_bindgen(js_name = "transformAllCss")]
pub fn transform_all_css(declarations: Vec<String>, options: JsValue) -> Result<String, JsError> {
    let transformer = Transformer::new(CssText::new(parse_options(options)?));
    transformer
        .all(&declarations)
        .map(|batch| batch.to_string())
        .map_err(|e| JsError::new(&e.to_string()))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn test_transform_css_pretty() {
        let css = transform_css("align-self: center", JsValue::UNDEFINED).unwrap();
        assert_eq!(css, "-ms-grid-row-align: center;\nalign-self: center;\n");
    }

    #[wasm_bindgen_test]
    fn test_transform_all_css_minified() {
        let options = serde_wasm_bindgen::to_value(&CssTextOptions { minify: true }).unwrap();
        let css = transform_all_css(
            vec!["display: grid".into(), "grid-row: 2 / 4".into()],
            options,
        )
        .unwrap();
        assert_eq!(
            css,
            "display:-ms-grid;display:grid;-ms-grid-row:2;-ms-grid-row-span:2;grid-row:2 / 4;"
        );
    }

    fn error_message(err: JsValue) -> String {
        let err: js_sys::Error = err.dyn_into().unwrap();
        String::from(err.message())
    }

    fn to_json(value: &JsValue) -> String {
        String::from(js_sys::JSON::stringify(value).unwrap())
    }

    /// 原样返回所有参数的 tag 函数
    fn echo() -> JsValue {
        Function::new_with_args("", "return Array.from(arguments)").into()
    }

    #[wasm_bindgen_test]
    fn test_create_transformer_rejects_non_function() {
        let err = create_transformer(JsValue::from_str("css")).err().unwrap();
        assert_eq!(
            error_message(err.into()),
            "Argument \"css\" must be a valid function."
        );
    }

    #[wasm_bindgen_test]
    fn test_all_passes_results_as_substitutions() {
        let transformer = create_transformer(echo()).unwrap();
        let out = transformer
            .all(vec![
                "display: grid".into(),
                "grid-template-columns: 1fr 2fr".into(),
            ])
            .unwrap();
        assert_eq!(
            to_json(&out),
            r#"[["","",""],[["display:-ms-grid;display:grid;"]],[["-ms-grid-columns:",";grid-template-columns:",";"],"1fr 2fr","1fr 2fr"]]"#
        );
    }

    #[wasm_bindgen_test]
    fn test_all_fails_before_calling_css() {
        let css = Function::new_with_args("", "throw new Error('css called')");
        let transformer = create_transformer(css.into()).unwrap();
        let err = transformer
            .all(vec!["display: grid".into(), "position: absolute".into()])
            .unwrap_err();
        assert_eq!(error_message(err), "Grid key position not supported.");
    }

    #[wasm_bindgen_test]
    fn test_transform_returns_css_result() {
        let transformer = create_transformer(echo()).unwrap();
        let out = transformer.transform("grid-row: 1 / 3").unwrap();
        assert_eq!(
            to_json(&out),
            r#"[["-ms-grid-row:",";-ms-grid-row-span:",";grid-row:",";"],"1","2","1 / 3"]"#
        );
    }

    #[wasm_bindgen_test]
    fn test_js_emitter_receives_literals() {
        let css = Function::new_with_args("strings", "return strings.join('|')");
        let transformer = create_transformer(css.into()).unwrap();
        let out = transformer.transform("justify-self: end").unwrap();
        assert_eq!(
            out.as_string().unwrap(),
            "-ms-grid-column-align:|;justify-self:|;"
        );
    }
}
