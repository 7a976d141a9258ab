//! 引用分类 - 业务能力层
//!
//! 行内缺少指向被引作品的链接时，该引用记为错误引用

use std::fmt::Display;

use crate::models::{RawReference, Reference};

/// 错误引用的报告项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedEntry {
    pub count_number: String,
    pub source: String,
    pub cite_item: String,
}

/// 错误引用报告，按服务列表中的序号排列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MalformedReport {
    entries: Vec<MalformedEntry>,
}

impl MalformedReport {
    pub fn entries(&self) -> &[MalformedEntry] {
        &self.entries
    }

    pub fn any_malformed(&self) -> bool {
        !self.entries.is_empty()
    }
}

impl Display for MalformedReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.any_malformed() {
            return writeln!(f, "未发现错误引用");
        }
        for entry in &self.entries {
            writeln!(f, "\n发现错误引用:")?;
            writeln!(f, "引用列表中的序号: {}", entry.count_number)?;
            writeln!(f, "被引文章标题:\n{}", entry.source)?;
            writeln!(f, "引用文章标题:\n{}", entry.cite_item)?;
        }
        Ok(())
    }
}

pub struct ReferenceClassifier;

impl ReferenceClassifier {
    pub fn classify_one(raw: RawReference) -> Reference {
        Reference {
            id: raw.id,
            count_number: raw.count_number,
            source: raw.source,
            cite_item: raw.cite_item,
            malformed: !raw.has_citation_anchor,
        }
    }

    /// 保持原有顺序逐条分类
    pub fn classify(raws: Vec<RawReference>) -> Vec<Reference> {
        raws.into_iter().map(Self::classify_one).collect()
    }

    /// 汇总错误引用；序号无法解析的排在最后，保持列表原顺序
    pub fn report(references: &[Reference]) -> MalformedReport {
        let mut malformed: Vec<&Reference> = references.iter().filter(|r| r.malformed).collect();
        malformed.sort_by_key(|r| {
            let ordinal = r.ordinal();
            (ordinal.is_none(), ordinal)
        });

        MalformedReport {
            entries: malformed
                .into_iter()
                .map(|r| MalformedEntry {
                    count_number: r.count_number.clone(),
                    source: r.source.clone(),
                    cite_item: r.cite_item.clone(),
                })
                .collect(),
        }
    }
}
