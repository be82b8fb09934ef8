use crate::units::{Emu, Point, Twip, twips_to_emus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRule {
    Auto,
    Exact,
    AtLeast,
}

impl LineRule {
    pub fn as_wml(self) -> &'static str {
        match self {
            LineRule::Auto => "auto",
            LineRule::Exact => "exact",
            LineRule::AtLeast => "atLeast",
        }
    }
}

/// Default `w:spacing` for generated paragraphs.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingDescriptor {
    pub before: Twip,
    pub before_autospacing: bool,
    pub after: Twip,
    pub after_autospacing: bool,
    pub line: i64, // 240ths of a line when line_rule is Auto, twips otherwise
    pub line_rule: LineRule,
}

impl SpacingDescriptor {
    /// 100 twips around, auto spacing on, single line.
    pub fn html_default() -> Self {
        SpacingDescriptor {
            before: Twip::new(100),
            before_autospacing: true,
            after: Twip::new(100),
            after_autospacing: true,
            line: 240,
            line_rule: LineRule::Auto,
        }
    }

    pub fn to_xml(&self) -> String {
        format!(
            r#"<w:spacing w:before="{}" w:beforeAutospacing="{}" w:after="{}" w:afterAutospacing="{}" w:line="{}" w:lineRule="{}"/>"#,
            self.before.twips(),
            u8::from(self.before_autospacing),
            self.after.twips(),
            u8::from(self.after_autospacing),
            self.line,
            self.line_rule.as_wml(),
        )
    }
}

/// Page size and margins as declared by the template's `w:pgSz` / `w:pgMar`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageGeometry {
    pub width: Twip,
    pub height: Option<Twip>,
    pub margin_left: Twip,
    pub margin_right: Twip,
    pub margin_top: Option<Twip>,
    pub margin_bottom: Option<Twip>,
}

/// Whether the theme's minor font and the styles' default size survive
/// template inspection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontDefaults {
    /// Minor font is forced to Times New Roman and the size to 12pt.
    #[default]
    ForceLiteral,
    TrustTheme,
}

/// Resolved defaults handed to the HTML to WordprocessingML mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct ConverterSettings {
    pub major_latin_font: String,
    pub minor_latin_font: String,
    pub default_font_size: Point,
    pub default_block_content_margin: String,
    pub default_spacing: SpacingDescriptor,
    pub default_spacing_in_tables: SpacingDescriptor,
    pub page: PageGeometry,
    pub base_uri_for_images: Option<String>,
}

// EMU values are recomputed on every call so they always follow `page`.
impl ConverterSettings {
    pub fn page_width_twips(&self) -> Twip {
        self.page.width
    }

    pub fn page_margin_left_twips(&self) -> Twip {
        self.page.margin_left
    }

    pub fn page_margin_right_twips(&self) -> Twip {
        self.page.margin_right
    }

    pub fn page_width_emus(&self) -> Emu {
        twips_to_emus(self.page.width)
    }

    pub fn page_margin_left_emus(&self) -> Emu {
        twips_to_emus(self.page.margin_left)
    }

    pub fn page_margin_right_emus(&self) -> Emu {
        twips_to_emus(self.page.margin_right)
    }
}
