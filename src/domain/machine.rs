// ==========================================
// 重機日常点検システム - 機種規則
// ==========================================
// 機種名 → 機種ID・正式名称・法的根拠の対応表
// 帳票生成と台帳取込の双方で同じ表を参照する
// ==========================================

use tracing::warn;

// ==========================================
// 法的根拠 (Legal Citation)
// ==========================================

/// 帳票ヘッダに記載する法的根拠
///
/// row3 は A3 セルに入る。row4 は A4 セルで、油圧ショベルのみ併記する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalCitation {
    pub row3: &'static str,
    pub row4: Option<&'static str>,
}

/// 既定の法的根拠（ブルドーザー・ローラー等、および未知の機種）
pub const DEFAULT_CITATION: LegalCitation = LegalCitation {
    row3: "　【安衛則第１７０条】",
    row4: None,
};

// ==========================================
// 機種規則表 (Machine Type Rules)
// ==========================================

/// 機種判定規則
///
/// keywords のいずれかが機種名に部分一致したら採用（上から先勝ち）
#[derive(Debug)]
pub struct MachineTypeRule {
    /// 部分一致キーワード（全角・半角の表記揺れを含む）
    pub keywords: &'static [&'static str],
    /// 機種ID
    pub type_id: &'static str,
    /// 正式名称
    pub display_name: &'static str,
    /// 法的根拠
    pub citation: LegalCitation,
}

/// 機種規則表
pub const MACHINE_TYPE_RULES: &[MachineTypeRule] = &[
    MachineTypeRule {
        keywords: &["油圧ショベル", "油圧ｼｮﾍﾞﾙ"],
        type_id: "excavator",
        display_name: "油圧ショベル",
        citation: LegalCitation {
            row3: "　【ｸﾚｰﾝ則第７８条】",
            row4: Some("　【安衛則第１７０条】"),
        },
    },
    MachineTypeRule {
        keywords: &["ハンドガイド式"],
        type_id: "hand_guide",
        display_name: "ハンドガイド式除草機",
        citation: LegalCitation {
            row3: "　【労働安全衛生法第２０条】",
            row4: None,
        },
    },
    MachineTypeRule {
        keywords: &["ブルドーザ"],
        type_id: "bulldozer",
        display_name: "ブルドーザー",
        citation: DEFAULT_CITATION,
    },
    MachineTypeRule {
        keywords: &["不整地運搬車"],
        type_id: "crawler_dump",
        display_name: "不整地運搬車",
        citation: DEFAULT_CITATION,
    },
    MachineTypeRule {
        keywords: &["コンバインドローラー"],
        type_id: "combined_roller",
        display_name: "コンバインドローラー",
        citation: DEFAULT_CITATION,
    },
    MachineTypeRule {
        keywords: &["振動ローラー", "振動ﾛｰﾗｰ"],
        type_id: "vibration_roller",
        display_name: "振動ローラー",
        citation: DEFAULT_CITATION,
    },
];

/// 機種名から規則を引く
///
/// # 戻り値
/// - `Some(rule)`: キーワードに部分一致した最初の規則
/// - `None`: どの規則にも一致しない
pub fn resolve_machine_type(machine_type: &str) -> Option<&'static MachineTypeRule> {
    MACHINE_TYPE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| machine_type.contains(kw)))
}

/// 機種名から法的根拠を引く
///
/// 未知の機種は警告を出した上で既定の根拠を返す（生成処理は継続する）
pub fn citation_for(machine_type: &str) -> LegalCitation {
    match resolve_machine_type(machine_type) {
        Some(rule) => rule.citation,
        None => {
            warn!("未対応の機種名のため既定の法的根拠を使用: {}", machine_type);
            DEFAULT_CITATION
        }
    }
}

// ==========================================
// 機種名・型式の分解
// ==========================================

/// 表題に使う機種名（最初の開き括弧より前の部分）
///
/// 全角「（」を優先し、なければ半角「(」で区切る。括弧がなければ全体
pub fn machine_name_for_title(machine_type: &str) -> &str {
    if let Some(idx) = machine_type.find('（') {
        &machine_type[..idx]
    } else if let Some(idx) = machine_type.find('(') {
        &machine_type[..idx]
    } else {
        machine_type
    }
}

/// 型式文字列から括弧内の仕様を取り出す
///
/// 最初の開き括弧と、その後に現れる最初の閉じ括弧の間を返す。
/// 全角の組を先に試し、取れなければ半角の組。括弧がなければ空文字列
pub fn model_spec(machine_model: &str) -> &str {
    extract_between(machine_model, '（', '）')
        .or_else(|| extract_between(machine_model, '(', ')'))
        .unwrap_or("")
}

fn extract_between(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)? + open.len_utf8();
    let rest = &text[start..];
    let end = rest.find(close)?;
    Some(&rest[..end])
}
