// ==========================================
// 重機日常点検システム - 帳票書式定義
// ==========================================
// フォント・配置・塗りの組み合わせを名前付き定数で持つ。
// rust_xlsxwriter の Format へは書き出し時に変換する
// ==========================================

/// 帳票全体で使うフォント名
pub const FONT_FAMILY: &str = "HG明朝E";

// ==========================================
// 塗り色 (RGB)
// ==========================================

/// 日付ヘッダなどの薄灰色
pub const FILL_HEADER_GRAY: u32 = 0xD3D3D3;
/// 良好（⚪）セルの薄緑
pub const FILL_PASS_GREEN: u32 = 0x90EE90;
/// 不良（×）セルの薄赤
pub const FILL_FAIL_RED: u32 = 0xFF6B6B;

// ==========================================
// フォント指定
// ==========================================

/// フォントの太字・斜体・下線の組み合わせ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontSpec {
    pub const fn plain(size: f64) -> Self {
        Self { size, bold: false, italic: false, underline: false }
    }

    pub const fn bold(size: f64) -> Self {
        Self { size, bold: true, italic: false, underline: false }
    }
}

pub const FONT_10: FontSpec = FontSpec::plain(10.0);
pub const FONT_12: FontSpec = FontSpec::plain(12.0);
pub const FONT_14: FontSpec = FontSpec::plain(14.0);
pub const FONT_16: FontSpec = FontSpec::plain(16.0);
pub const FONT_18: FontSpec = FontSpec::plain(18.0);
pub const FONT_11_BOLD: FontSpec = FontSpec::bold(11.0);
pub const FONT_14_BOLD: FontSpec = FontSpec::bold(14.0);
pub const FONT_18_BOLD: FontSpec = FontSpec::bold(18.0);

/// 注意書き（7行目）用の太字下線
pub const FONT_16_BOLD_UNDERLINE: FontSpec =
    FontSpec { size: 16.0, bold: true, italic: false, underline: true };

/// 表題（5行目）用の太字斜体
pub const FONT_26_BOLD_ITALIC: FontSpec =
    FontSpec { size: 26.0, bold: true, italic: true, underline: false };

// ==========================================
// 配置指定
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VAlign {
    Center,
    Bottom,
}

/// 水平・垂直配置と折り返しの組み合わせ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignSpec {
    pub horizontal: HAlign,
    pub vertical: VAlign,
    pub wrap: bool,
}

pub const ALIGN_LEFT_CENTER: AlignSpec =
    AlignSpec { horizontal: HAlign::Left, vertical: VAlign::Center, wrap: false };
pub const ALIGN_CENTER: AlignSpec =
    AlignSpec { horizontal: HAlign::Center, vertical: VAlign::Center, wrap: false };
pub const ALIGN_LEFT_BOTTOM: AlignSpec =
    AlignSpec { horizontal: HAlign::Left, vertical: VAlign::Bottom, wrap: false };
pub const ALIGN_CENTER_WRAP: AlignSpec =
    AlignSpec { horizontal: HAlign::Center, vertical: VAlign::Center, wrap: true };

// ==========================================
// セル書式
// ==========================================

/// セル1つ分の書式。罫線はここではなく EdgeSet が持つ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub font: FontSpec,
    pub align: AlignSpec,
    pub fill: Option<u32>,
}

impl CellStyle {
    pub const fn new(font: FontSpec, align: AlignSpec) -> Self {
        Self { font, align, fill: None }
    }

    pub const fn filled(font: FontSpec, align: AlignSpec, fill: u32) -> Self {
        Self { font, align, fill: Some(fill) }
    }
}
