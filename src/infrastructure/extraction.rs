//! 具名提取约定
//!
//! 每种页面对应一段固定的提取脚本，页面结构相关的选择器只出现在这里。
//! 没有匹配的行时脚本返回 null。

/// 提取约定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// 作者候选列表 → `[{id, name}]`
    AuthorList,
    /// 出版物列表 → `[{id, title, authors, description}]`
    ItemList,
    /// 引用列表 → `[{id, countNumber, source, citeItem, hasCitationAnchor}]`
    ReferenceList,
    /// 分页控件 → `bool`，存在下一页时为 true
    Pagination,
}

impl Extraction {
    pub fn name(self) -> &'static str {
        match self {
            Extraction::AuthorList => "author-list",
            Extraction::ItemList => "item-list",
            Extraction::ReferenceList => "reference-list",
            Extraction::Pagination => "pagination",
        }
    }

    pub fn script(self) -> &'static str {
        match self {
            Extraction::AuthorList => AUTHOR_LIST_JS,
            Extraction::ItemList => ITEM_LIST_JS,
            Extraction::ReferenceList => REFERENCE_LIST_JS,
            Extraction::Pagination => PAGINATION_JS,
        }
    }
}

const AUTHOR_LIST_JS: &str = r#"
(() => {
    const rows = document.querySelectorAll('#restab tr[valign="top"]');
    if (rows.length === 0) {
        return null;
    }
    return Array.from(rows).map(row => {
        const name = row.querySelector('td.midtext[align="left"] > font');
        return {
            id: row.id,
            name: name ? name.textContent.trim() : '',
        };
    });
})()
"#;

const ITEM_LIST_JS: &str = r#"
(() => {
    const rows = document.querySelectorAll('#restab tr[valign="middle"]');
    if (rows.length === 0) {
        return null;
    }
    const text = el => el ? el.textContent.trim() : '';
    return Array.from(rows).map(row => {
        const fonts = row.querySelectorAll('td[align="left"] font');
        const authors = text(row.querySelector('td[align="left"] i'));
        return {
            id: row.id,
            title: text(row.querySelector('td[align="left"] a')),
            authors: authors === '' ? [] : authors.split(', '),
            description: fonts.length > 0 ? text(fonts[fonts.length - 1]) : '',
        };
    });
})()
"#;

const REFERENCE_LIST_JS: &str = r#"
(() => {
    const rows = document.querySelectorAll('#restab tr[valign="middle"]');
    if (rows.length === 0) {
        return null;
    }
    const text = el => el ? el.textContent.trim() : '';
    return Array.from(rows).map(row => ({
        id: row.id,
        countNumber: text(row.querySelector('td[align="center"] b')),
        source: text(row.querySelector('td[align="left"] > font')),
        citeItem: text(row.querySelector('td[align="left"] table .menug')),
        hasCitationAnchor: row.querySelector('td[align="left"] > a') !== null,
    }));
})()
"#;

const PAGINATION_JS: &str = r#"
(() => {
    const controls = document.querySelectorAll('#pages td.mouse-hovergr');
    if (controls.length === 0) {
        return false;
    }
    return controls[controls.length - 1].querySelector('font') === null;
})()
"#;
