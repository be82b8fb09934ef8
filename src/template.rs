use crate::blank::blank_document;
use crate::error::Error;
use crate::package::{Package, PartKind};
use crate::settings::{ConverterSettings, FontDefaults, PageGeometry, SpacingDescriptor};
use crate::units::{Point, Twip};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

const FALLBACK_FONT_SIZE: f64 = 12.0;
const FORCED_MINOR_FONT: &str = "Times New Roman";
const FORCED_FONT_SIZE: f64 = 12.0;

fn wml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(WML_NS))
}

fn dml<'a>(node: roxmltree::Node<'a, 'a>, name: &str) -> Option<roxmltree::Node<'a, 'a>> {
    node.children()
        .find(|n| n.tag_name().name() == name && n.tag_name().namespace() == Some(DML_NS))
}

fn parse_twips(val: &str) -> Option<Twip> {
    let val = val.trim();
    if let Ok(v) = val.parse::<i64>() {
        return Some(Twip::new(v));
    }
    val.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Twip::from_f64_truncated)
}

fn twips_attr(node: roxmltree::Node, attr: &str) -> Option<Twip> {
    node.attribute((WML_NS, attr)).and_then(parse_twips)
}

fn required_twips(node: roxmltree::Node, attr: &str) -> Result<Twip, Error> {
    twips_attr(node, attr).ok_or_else(|| {
        Error::MissingPageSetup(format!(
            "w:{} has no numeric w:{attr} attribute",
            node.tag_name().name()
        ))
    })
}

fn parse_page_geometry(xml_content: &str) -> Result<PageGeometry, Error> {
    let xml = roxmltree::Document::parse(xml_content)?;

    let sect = xml
        .root_element()
        .descendants()
        .find(|n| n.tag_name().name() == "sectPr" && n.tag_name().namespace() == Some(WML_NS))
        .ok_or_else(|| Error::MissingPageSetup("no w:sectPr in main document".into()))?;
    let pg_sz = wml(sect, "pgSz")
        .ok_or_else(|| Error::MissingPageSetup("w:sectPr has no w:pgSz".into()))?;
    let pg_mar = wml(sect, "pgMar")
        .ok_or_else(|| Error::MissingPageSetup("w:sectPr has no w:pgMar".into()))?;

    Ok(PageGeometry {
        width: required_twips(pg_sz, "w")?,
        height: twips_attr(pg_sz, "h"),
        margin_left: required_twips(pg_mar, "left")?,
        margin_right: required_twips(pg_mar, "right")?,
        margin_top: twips_attr(pg_mar, "top"),
        margin_bottom: twips_attr(pg_mar, "bottom"),
    })
}

struct FontInfo {
    major: String,
    minor: String,
    size: f64,
}

impl FontInfo {
    fn fallback() -> Self {
        FontInfo {
            major: String::new(),
            minor: String::new(),
            size: FALLBACK_FONT_SIZE,
        }
    }
}

fn latin_typeface(font_scheme: roxmltree::Node, which: &str) -> String {
    dml(font_scheme, which)
        .and_then(|n| dml(n, "latin"))
        .and_then(|n| n.attribute("typeface"))
        .unwrap_or("")
        .to_string()
}

/// `w:docDefaults/w:rPrDefault/w:rPr/w:sz`, converted from half-points.
///
/// `None` when the styles part or the `w:sz` value is missing. A value that
/// does not parse gives the 12pt fallback.
fn parse_default_font_size(package: &mut Package) -> Option<f64> {
    let styles_name = package.related_part(PartKind::Styles)?;
    let Some(xml_content) = package.read_part(&styles_name) else {
        log::warn!("Styles part {styles_name} not readable");
        return None;
    };
    let Ok(xml) = roxmltree::Document::parse(&xml_content) else {
        log::warn!("Styles part {styles_name} is not valid XML");
        return None;
    };

    let sz = wml(xml.root_element(), "docDefaults")
        .and_then(|n| wml(n, "rPrDefault"))
        .and_then(|n| wml(n, "rPr"))
        .and_then(|n| wml(n, "sz"))
        .and_then(|n| n.attribute((WML_NS, "val")))?;
    match sz.trim().parse::<f64>() {
        Ok(half_points) => Some(half_points / 2.0),
        Err(_) => {
            log::warn!("Unparseable default font size {sz:?}, using {FALLBACK_FONT_SIZE}pt");
            Some(FALLBACK_FONT_SIZE)
        }
    }
}

/// Theme fonts plus the document default size.
///
/// The theme fonts only count when the styles part also declares a default
/// size; without one, fonts and size all fall back.
fn parse_font_info(package: &mut Package) -> FontInfo {
    let Some(theme_name) = package.related_part(PartKind::Theme) else {
        log::debug!("Template has no theme part");
        return FontInfo::fallback();
    };
    let Some(xml_content) = package.read_part(&theme_name) else {
        log::warn!("Theme part {theme_name} not readable, using default fonts");
        return FontInfo::fallback();
    };
    let Ok(xml) = roxmltree::Document::parse(&xml_content) else {
        log::warn!("Theme part {theme_name} is not valid XML, using default fonts");
        return FontInfo::fallback();
    };
    let Some(font_scheme) = dml(xml.root_element(), "themeElements")
        .and_then(|n| dml(n, "fontScheme"))
    else {
        log::debug!("Theme {theme_name} has no font scheme");
        return FontInfo::fallback();
    };
    let Some(size) = parse_default_font_size(package) else {
        log::debug!("No default font size in styles, ignoring theme fonts");
        return FontInfo::fallback();
    };

    FontInfo {
        major: latin_typeface(font_scheme, "majorFont"),
        minor: latin_typeface(font_scheme, "minorFont"),
        size,
    }
}

/// Inspect a DOCX template and resolve converter settings from it.
pub fn settings_from_template(bytes: &[u8]) -> Result<ConverterSettings, Error> {
    settings_from_template_with(bytes, FontDefaults::default())
}

pub fn settings_from_template_with(
    bytes: &[u8],
    font_defaults: FontDefaults,
) -> Result<ConverterSettings, Error> {
    let mut package = Package::open(bytes)?;

    let page = parse_page_geometry(&package.main_document_xml()?)?;
    let fonts = parse_font_info(&mut package);

    let (minor_latin_font, default_font_size) = match font_defaults {
        // NOTE: discards the theme minor font and styles size. Looks like a
        // leftover override, but existing output depends on it.
        // FontDefaults::TrustTheme keeps the template's values.
        FontDefaults::ForceLiteral => (FORCED_MINOR_FONT.to_string(), FORCED_FONT_SIZE),
        FontDefaults::TrustTheme => (fonts.minor, fonts.size),
    };

    log::debug!(
        "Template page: width={} left={} right={} (twips); fonts: major={:?} minor={:?} size={}pt",
        page.width.twips(),
        page.margin_left.twips(),
        page.margin_right.twips(),
        fonts.major,
        minor_latin_font,
        default_font_size,
    );

    Ok(ConverterSettings {
        major_latin_font: fonts.major,
        minor_latin_font,
        default_font_size: Point::new(default_font_size),
        default_block_content_margin: "auto".to_string(),
        default_spacing: SpacingDescriptor::html_default(),
        default_spacing_in_tables: SpacingDescriptor::html_default(),
        page,
        base_uri_for_images: None,
    })
}

/// Settings resolved from the built-in blank document.
pub fn default_settings() -> Result<ConverterSettings, Error> {
    settings_from_template(blank_document()?)
}
