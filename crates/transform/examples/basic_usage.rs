/// 演示单条与批量转换
use gridshim_transform::{CssText, DeclarationList, Transformer};

fn main() {
    println!("=== gridshim 示例 ===\n");

    // 示例 1: 单条声明 → CSS 文本
    let transformer = Transformer::new(CssText::default());
    for decl in [
        "display: grid",
        "grid-template-columns: repeat(3, minmax(100px, 1fr)) 200px",
        "grid-column: 2 / 4",
    ] {
        match transformer.transform(decl) {
            Ok(css) => println!("{}\n{}", decl, css),
            Err(e) => println!("{} -> error: {}", decl, e),
        }
    }

    // 示例 2: 批量转换，整体拼接
    let minified = Transformer::new(CssText::minified());
    let batch = minified
        .all(["display: grid", "grid-template-rows: repeat(2, 50px)", "align-self: end"])
        .unwrap();
    println!("批量输出: {}\n", batch);

    // 示例 3: 结构化声明
    let decls = Transformer::new(DeclarationList)
        .transform("justify-self: center")
        .unwrap();
    for d in &decls {
        println!("   {} => {}", d.property, d.value);
    }

    // 示例 4: 不支持的写法
    if let Err(e) = transformer.transform("grid-template-columns: repeat(auto-fill, 100px)") {
        println!("\n预期错误: {}", e);
    }
}
