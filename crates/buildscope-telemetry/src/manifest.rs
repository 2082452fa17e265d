//! Android manifest capability extraction
//!
//! Locates the `AndroidManifest.xml` produced by the last build and reads the
//! `android:name` of every `uses-permission` and `uses-feature` element.
//!
//! A manifest that does not exist yet is not an error (the build may not
//! have produced one). A manifest that exists but is not well-formed is.

use std::path::{Path, PathBuf};

use buildscope_core::domain::{BuildConfig, BuildSystem, CapabilitySet, CollectorError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use tracing::{debug, info};

/// File name of the manifest in every build layout.
pub const MANIFEST_FILE_NAME: &str = "AndroidManifest.xml";

const PERMISSION_TAG: &[u8] = b"uses-permission";
const FEATURE_TAG: &[u8] = b"uses-feature";
const NAME_ATTRIBUTE: &str = "android:name";

/// Resolves where a build left its manifest.
pub struct ManifestLocation;

impl ManifestLocation {
    /// Gradle builds write one merged manifest per variant; the internal
    /// build system keeps a single one in its staging area.
    pub fn resolve(config: &BuildConfig) -> PathBuf {
        match config.build_system {
            BuildSystem::Gradle => config
                .gradle_output_root
                .join(config.variant.dir_name())
                .join(MANIFEST_FILE_NAME),
            BuildSystem::Internal => config.staging_root.join(MANIFEST_FILE_NAME),
        }
    }
}

/// Reads declared permissions and features from the build manifest.
pub struct ManifestCapabilityExtractor;

impl ManifestCapabilityExtractor {
    /// Extracts capabilities from the manifest resolved for `config`.
    ///
    /// Returns `Ok(None)` when no manifest exists at the resolved path.
    pub fn extract(config: &BuildConfig) -> Result<Option<CapabilitySet>, CollectorError> {
        let path = ManifestLocation::resolve(config);
        Self::extract_from(&path)
    }

    /// Extracts capabilities from the manifest at `path`.
    pub fn extract_from(path: &Path) -> Result<Option<CapabilitySet>, CollectorError> {
        if !path.is_file() {
            debug!(path = %path.display(), "No manifest found, skipping capability report");
            return Ok(None);
        }

        let bytes = std::fs::read(path).map_err(|source| CollectorError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let capabilities = decode_manifest(&bytes)
            .and_then(|content| parse_capabilities(&content))
            .map_err(|message| CollectorError::ManifestParse {
                path: path.to_path_buf(),
                message,
            })?;

        info!(
            path = %path.display(),
            permissions = capabilities.permissions.len(),
            features = capabilities.features.len(),
            "Extracted manifest capabilities"
        );
        Ok(Some(capabilities))
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const UTF16_LE_BOM: &[u8] = b"\xFF\xFE";
const UTF16_BE_BOM: &[u8] = b"\xFE\xFF";
// `<?` of an XML declaration without a byte order mark
const UTF16_LE_DECL: &[u8] = b"<\0?\0";
const UTF16_BE_DECL: &[u8] = b"\0<\0?";

/// Decodes manifest bytes as UTF-8 or UTF-16.
///
/// UTF-16 is recognised by its byte order mark or by a leading XML
/// declaration. Other encodings are rejected.
pub fn decode_manifest(bytes: &[u8]) -> Result<String, String> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return decode_utf8(rest);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    if bytes.starts_with(UTF16_LE_DECL) {
        return decode_utf16(bytes, u16::from_le_bytes);
    }
    if bytes.starts_with(UTF16_BE_DECL) {
        return decode_utf16(bytes, u16::from_be_bytes);
    }
    decode_utf8(bytes)
}

fn decode_utf8(bytes: &[u8]) -> Result<String, String> {
    String::from_utf8(bytes.to_vec()).map_err(|e| format!("invalid UTF-8: {e}"))
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err("invalid UTF-16: odd number of bytes".to_string());
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| format!("invalid UTF-16: {e}"))
}

/// Where the reader is relative to the root element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Prolog,
    Root,
    Epilog,
}

/// Parses a manifest document and collects capability names in document order.
///
/// The whole document is checked for well-formedness, including elements
/// and text that carry no capabilities, so a corrupt manifest is rejected
/// rather than partially read.
pub fn parse_capabilities(xml: &str) -> Result<CapabilitySet, String> {
    let mut reader = NsReader::from_str(xml);
    let mut capabilities = CapabilitySet::new();
    let mut position = Position::Prolog;
    let mut depth: usize = 0;
    let mut at_start = true;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        match event {
            Event::Start(element) => {
                if position == Position::Epilog {
                    return Err("multiple root elements".to_string());
                }
                position = Position::Root;
                depth += 1;
                inspect(&reader, &element, &mut capabilities)?;
            }
            Event::Empty(element) => {
                if position == Position::Epilog {
                    return Err("multiple root elements".to_string());
                }
                inspect(&reader, &element, &mut capabilities)?;
                if depth == 0 {
                    position = Position::Epilog;
                }
            }
            Event::End(_) => {
                // mismatched end tags are rejected by the reader itself
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    position = Position::Epilog;
                }
            }
            Event::Text(text) => {
                if depth == 0 {
                    if !text.iter().all(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n')) {
                        return Err("text outside the root element".to_string());
                    }
                } else {
                    text.unescape().map_err(|e| e.to_string())?;
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err("CDATA section outside the root element".to_string());
            }
            Event::Decl(_) if !at_start => {
                return Err("XML declaration is not at the start of the document".to_string());
            }
            Event::DocType(_) if position != Position::Prolog => {
                return Err("document type declaration after the root element".to_string());
            }
            Event::Eof => break,
            _ => {}
        }
        at_start = false;
    }

    match position {
        Position::Prolog => Err("root element is missing".to_string()),
        Position::Root => Err(format!(
            "unexpected end of document, {depth} element(s) not closed"
        )),
        Position::Epilog => Ok(capabilities),
    }
}

/// Checks every attribute of `element` and records its capability, if any.
fn inspect(
    reader: &NsReader<&[u8]>,
    element: &BytesStart<'_>,
    capabilities: &mut CapabilitySet,
) -> Result<(), String> {
    if let (ResolveResult::Unknown(prefix), _) = reader.resolve_element(element.name()) {
        return Err(undeclared_prefix(&prefix));
    }

    let mut name = None;
    for attribute in element.attributes() {
        // duplicated and unquoted attributes are rejected here
        let attribute = attribute.map_err(|e| e.to_string())?;
        if let (ResolveResult::Unknown(prefix), _) = reader.resolve_attribute(attribute.key) {
            return Err(undeclared_prefix(&prefix));
        }
        let value = attribute.unescape_value().map_err(|e| e.to_string())?;
        if attribute.key.as_ref() == NAME_ATTRIBUTE.as_bytes() {
            name = Some(value.into_owned());
        }
    }

    let tag = element.name();
    let Some(name) = name else {
        return Ok(());
    };
    if tag.as_ref() == PERMISSION_TAG {
        capabilities.push_permission(name);
    } else if tag.as_ref() == FEATURE_TAG {
        capabilities.push_feature(name);
    }
    Ok(())
}

fn undeclared_prefix(prefix: &[u8]) -> String {
    format!("'{}' is an undeclared prefix", String::from_utf8_lossy(prefix))
}
