use regex::Regex;
use serde::{Deserialize, Serialize};

/// 页面上直接提取出的引用记录，尚未分类
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReference {
    #[serde(deserialize_with = "super::deserialize_row_id")]
    pub id: String,
    /// 服务列表中显示的序号，例如 "12."
    pub count_number: String,
    pub source: String,
    pub cite_item: String,
    /// 行内是否存在指向被引作品的链接
    pub has_citation_anchor: bool,
}

/// 分类后的引用记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reference {
    pub id: String,
    pub count_number: String,
    pub source: String,
    pub cite_item: String,
    pub malformed: bool,
}

impl Reference {
    /// 序号的数值部分
    pub fn ordinal(&self) -> Option<u32> {
        parse_ordinal(&self.count_number)
    }
}

/// 解析序号文本中的数字，例如 "12." → 12
pub fn parse_ordinal(text: &str) -> Option<u32> {
    let re = Regex::new(r"\d+").ok()?;
    re.find(text).and_then(|m| m.as_str().parse().ok())
}
