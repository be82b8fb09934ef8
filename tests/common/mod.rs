#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const A_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const REL_TYPE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

/// Build a DOCX in memory from (part name, content) pairs.
pub fn zip_parts(parts: &[(&str, String)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in parts {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn document_xml(sect_pr: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{W_NS}"><w:body><w:p><w:r><w:t>Hello</w:t></w:r></w:p>{sect_pr}</w:body></w:document>"#
    )
}

pub fn sect_pr(width: i64, left: i64, right: i64) -> String {
    format!(
        r#"<w:sectPr><w:pgSz w:w="{width}" w:h="15840"/><w:pgMar w:top="1440" w:bottom="1440" w:left="{left}" w:right="{right}" w:header="720" w:footer="720"/></w:sectPr>"#
    )
}

pub fn theme_xml(major: &str, minor: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><a:theme xmlns:a="{A_NS}" name="Office Theme"><a:themeElements><a:fontScheme name="Office"><a:majorFont><a:latin typeface="{major}"/><a:ea typeface=""/></a:majorFont><a:minorFont><a:latin typeface="{minor}"/><a:ea typeface=""/></a:minorFont></a:fontScheme></a:themeElements></a:theme>"#
    )
}

pub fn theme_without_font_scheme() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><a:theme xmlns:a="{A_NS}" name="Office Theme"><a:themeElements><a:clrScheme name="Office"/></a:themeElements></a:theme>"#
    )
}

pub fn styles_xml(sz: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles xmlns:w="{W_NS}"><w:docDefaults><w:rPrDefault><w:rPr><w:sz w:val="{sz}"/></w:rPr></w:rPrDefault></w:docDefaults></w:styles>"#
    )
}

/// `word/_rels/document.xml.rels` pointing at the given (type, target) pairs.
pub fn document_rels(rels: &[(&str, &str)]) -> String {
    let body: String = rels
        .iter()
        .enumerate()
        .map(|(i, (kind, target))| {
            format!(
                r#"<Relationship Id="rId{}" Type="{REL_TYPE}/{kind}" Target="{target}"/>"#,
                i + 1
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{body}</Relationships>"#
    )
}

/// Template with geometry, a theme and styles wired up through relationships.
pub fn full_template(width: i64, left: i64, right: i64, major: &str, minor: &str, sz: &str) -> Vec<u8> {
    zip_parts(&[
        ("_rels/.rels", PACKAGE_RELS.to_string()),
        ("word/document.xml", document_xml(&sect_pr(width, left, right))),
        (
            "word/_rels/document.xml.rels",
            document_rels(&[("theme", "theme/theme1.xml"), ("styles", "styles.xml")]),
        ),
        ("word/theme/theme1.xml", theme_xml(major, minor)),
        ("word/styles.xml", styles_xml(sz)),
    ])
}

/// Template with geometry and styles but no theme part.
pub fn template_without_theme(width: i64, left: i64, right: i64) -> Vec<u8> {
    zip_parts(&[
        ("_rels/.rels", PACKAGE_RELS.to_string()),
        ("word/document.xml", document_xml(&sect_pr(width, left, right))),
        ("word/_rels/document.xml.rels", document_rels(&[("styles", "styles.xml")])),
        ("word/styles.xml", styles_xml("28")),
    ])
}

/// Styles part whose default run properties carry no `w:sz`.
pub fn styles_without_size() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:styles xmlns:w="{W_NS}"><w:docDefaults><w:rPrDefault><w:rPr/></w:rPrDefault></w:docDefaults></w:styles>"#
    )
}
