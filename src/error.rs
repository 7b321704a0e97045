use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum FxError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("failed to parse effects config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid effects config: {0}")]
    InvalidConfig(String),
}

impl From<JsValue> for FxError {
    fn from(value: JsValue) -> Self {
        FxError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type FxResult<T> = Result<T, FxError>;
