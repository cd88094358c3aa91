//! Public-key text interchange.
//!
//! A public key travels as a small XML document:
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <RSAParameters>
//!   <Exponent>AQAB</Exponent>
//!   <Modulus>base64(big-endian modulus)</Modulus>
//! </RSAParameters>
//! ```
//!
//! Only `Exponent` and `Modulus` are ever written or read. The six private
//! components are omitted entirely, even when the source record holds them.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::encoding::is_null_or_empty;
use crate::error::GuardError;
use crate::key::RsaKeyMaterial;

/// Name of the root element.
pub const ROOT_ELEMENT: &str = "RSAParameters";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Clone, Copy)]
enum PublicField {
    Exponent,
    Modulus,
}

impl PublicField {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"Exponent" => Some(PublicField::Exponent),
            b"Modulus" => Some(PublicField::Modulus),
            _ => None,
        }
    }

    fn slot(self, key: &mut RsaKeyMaterial) -> &mut Option<Vec<u8>> {
        match self {
            PublicField::Exponent => &mut key.exponent,
            PublicField::Modulus => &mut key.modulus,
        }
    }
}

impl RsaKeyMaterial {
    /// Serialise the public part of this record.
    ///
    /// A record with neither public field set produces a bare root element.
    pub fn to_public_key_xml(&self) -> String {
        let mut body = String::new();
        for (tag, value) in [("Exponent", &self.exponent), ("Modulus", &self.modulus)] {
            match value.as_deref() {
                // The standard base64 alphabet never needs XML escaping.
                Some(bytes) if !bytes.is_empty() => {
                    body.push_str(&format!("  <{tag}>{}</{tag}>\n", STANDARD.encode(bytes)));
                }
                Some(_) => body.push_str(&format!("  <{tag} />\n")),
                None => {}
            }
        }

        if body.is_empty() {
            format!("{XML_DECLARATION}\n<{ROOT_ELEMENT} />")
        } else {
            format!("{XML_DECLARATION}\n<{ROOT_ELEMENT}>\n{body}</{ROOT_ELEMENT}>")
        }
    }

    /// Parse a public-key document back into a record.
    ///
    /// Only `modulus` and `exponent` are populated; any other element is
    /// ignored. The result is not role-checked.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::NullOrEmptyInput`] if `xml` is absent or blank.
    /// Returns [`GuardError::MalformedKeyMaterial`] if the text is not
    /// well-formed, the root element is wrong, or a field is not base64.
    pub fn from_public_key_xml(xml: Option<&str>) -> Result<Self, GuardError> {
        let xml = match xml {
            Some(text) if !is_null_or_empty(Some(text.trim())) => text,
            _ => return Err(GuardError::NullOrEmptyInput { argument: "xml" }),
        };

        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut key = RsaKeyMaterial::default();
        let mut seen_root = false;
        let mut current: Option<PublicField> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| GuardError::MalformedKeyMaterial(format!("invalid xml: {e}")))?;

            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    let name = e.name();
                    if !seen_root {
                        if name.as_ref() != ROOT_ELEMENT.as_bytes() {
                            return Err(GuardError::MalformedKeyMaterial(format!(
                                "expected root element <{ROOT_ELEMENT}>"
                            )));
                        }
                        seen_root = true;
                        continue;
                    }
                    current = PublicField::from_tag(name.as_ref());
                    if let Some(field) = current {
                        *field.slot(&mut key) = Some(Vec::new());
                        if is_empty {
                            current = None;
                        }
                    }
                }
                Event::Text(ref t) => {
                    if let Some(field) = current {
                        let text = t.unescape().map_err(|e| {
                            GuardError::MalformedKeyMaterial(format!("invalid text: {e}"))
                        })?;
                        let bytes = STANDARD.decode(text.as_bytes()).map_err(|e| {
                            GuardError::MalformedKeyMaterial(format!("invalid base64: {e}"))
                        })?;
                        *field.slot(&mut key) = Some(bytes);
                    }
                }
                Event::End(_) => current = None,
                Event::Eof => break,
                _ => {}
            }
        }

        if !seen_root {
            return Err(GuardError::MalformedKeyMaterial(format!(
                "missing root element <{ROOT_ELEMENT}>"
            )));
        }
        Ok(key)
    }
}
