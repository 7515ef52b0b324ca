use thiserror::Error;

/// 转换错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// emitter 不可调用（仅 wasm 绑定会产生）
    #[error("{0}")]
    InvalidConfiguration(String),

    /// 不在规则表中的属性名
    #[error("Grid key {0} not supported.")]
    UnsupportedProperty(String),

    /// 旧版 grid 无法表达的特性（auto-fit / auto-fill）
    #[error("{0} is not supported by the -ms- grid implementation")]
    UnsupportedFeature(String),

    /// 缺少 `:` 分隔符
    #[error("Malformed declaration: {0:?}")]
    MalformedDeclaration(String),
}

pub type Result<T> = std::result::Result<T, TransformError>;
