pub mod author;
pub mod item;
pub mod reference;
pub mod session;

pub use author::Author;
pub use item::Item;
pub use reference::{RawReference, Reference};
pub use session::{Cookie, Session};

/// 去掉行 ID 的字母前缀（例如 "a12345"、"arw987"）
pub fn normalize_row_id(raw: &str) -> String {
    raw.trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .to_string()
}

/// 反序列化时规范化行 ID
pub(crate) fn deserialize_row_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
    Ok(normalize_row_id(raw.trim()))
}
