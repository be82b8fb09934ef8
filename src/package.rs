use std::io::{Cursor, Read};

use crate::error::Error;

const MAIN_DOCUMENT_FALLBACK: &str = "word/document.xml";
const OFFICE_DOCUMENT_REL_SUFFIX: &str = "/officeDocument";

/// Relationship types this crate follows, matched on their last path segment
/// so both transitional and strict OOXML URIs resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PartKind {
    Theme,
    Styles,
}

impl PartKind {
    fn rel_suffix(self) -> &'static str {
        match self {
            PartKind::Theme => "/theme",
            PartKind::Styles => "/styles",
        }
    }
}

struct Relationship {
    rel_type: String,
    target: String,
    external: bool,
}

/// A DOCX package opened read-only over an in-memory buffer.
pub(crate) struct Package<'a> {
    zip: zip::ZipArchive<Cursor<&'a [u8]>>,
    main_document: String,
}

impl<'a> Package<'a> {
    pub(crate) fn open(bytes: &'a [u8]) -> Result<Self, Error> {
        let mut zip = zip::ZipArchive::new(Cursor::new(bytes))?;

        let from_rels = read_zip_text(&mut zip, "_rels/.rels").map(|xml| {
            parse_relationships(&xml)
                .into_iter()
                .find(|rel| !rel.external && rel.rel_type.ends_with(OFFICE_DOCUMENT_REL_SUFFIX))
                .map(|rel| resolve_target("", &rel.target))
        });
        let main_document = match from_rels {
            Some(Some(path)) => path,
            Some(None) => {
                return Err(Error::InvalidDocx(
                    "package has no officeDocument relationship".into(),
                ));
            }
            None => MAIN_DOCUMENT_FALLBACK.to_string(),
        };

        if zip.index_for_name(&main_document).is_none() {
            return Err(Error::InvalidDocx(format!(
                "missing main document part {main_document}"
            )));
        }

        Ok(Package { zip, main_document })
    }

    pub(crate) fn main_document_xml(&mut self) -> Result<String, Error> {
        let mut content = String::new();
        self.zip
            .by_name(&self.main_document)?
            .read_to_string(&mut content)?;
        Ok(content)
    }

    /// Path of the part the main document relates to with `kind`.
    ///
    /// Without a main document relationships part, falls back to the
    /// conventional location under `word/`.
    pub(crate) fn related_part(&mut self, kind: PartKind) -> Option<String> {
        let rels_path = rels_path_for(&self.main_document);
        match read_zip_text(&mut self.zip, &rels_path) {
            Some(xml) => parse_relationships(&xml)
                .into_iter()
                .find(|rel| !rel.external && rel.rel_type.ends_with(kind.rel_suffix()))
                .map(|rel| resolve_target(&self.main_document, &rel.target)),
            None => self.conventional_part(kind),
        }
    }

    pub(crate) fn read_part(&mut self, name: &str) -> Option<String> {
        read_zip_text(&mut self.zip, name)
    }

    fn conventional_part(&self, kind: PartKind) -> Option<String> {
        match kind {
            PartKind::Styles => Some("word/styles.xml".to_string()),
            PartKind::Theme => self
                .zip
                .file_names()
                .filter(|n| n.starts_with("word/theme/") && n.ends_with(".xml"))
                .min()
                .map(str::to_string),
        }
    }
}

fn read_zip_text(zip: &mut zip::ZipArchive<Cursor<&[u8]>>, name: &str) -> Option<String> {
    let mut content = String::new();
    zip.by_name(name).ok()?.read_to_string(&mut content).ok()?;
    Some(content)
}

fn parse_relationships(xml_content: &str) -> Vec<Relationship> {
    let Ok(xml) = roxmltree::Document::parse(xml_content) else {
        log::warn!("Unreadable relationships part, ignoring it");
        return Vec::new();
    };
    xml.root_element()
        .children()
        .filter(|n| n.tag_name().name() == "Relationship")
        .filter_map(|n| {
            Some(Relationship {
                rel_type: n.attribute("Type")?.to_string(),
                target: n.attribute("Target")?.to_string(),
                external: n.attribute("TargetMode") == Some("External"),
            })
        })
        .collect()
}

/// `word/document.xml` -> `word/_rels/document.xml.rels`
fn rels_path_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
        None => format!("_rels/{part}.rels"),
    }
}

/// Resolve a relationship target against the part that owns the relationship.
/// An empty `source` means the package root.
fn resolve_target(source: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }
    let mut segments: Vec<&str> = match source.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };
    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}
