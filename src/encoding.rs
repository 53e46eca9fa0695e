use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text encodings accepted when decoding a record from raw bytes.
///
/// Python-style codec names are resolved first (`latin-1` is true
/// ISO-8859-1, `ascii` rejects bytes above 0x7f, `utf-16` sniffs a BOM);
/// any other name is looked up as a WHATWG label through `encoding_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Encoding {
    Ascii,
    Latin1,
    /// UTF-8 with an optional leading BOM
    Utf8Sig,
    /// UTF-16 whose byte order comes from a leading BOM, little-endian without one
    Utf16,
    Label(&'static encoding_rs::Encoding),
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::UTF_8
    }
}

impl Encoding {
    pub const UTF_8: Encoding = Encoding::Label(&encoding_rs::UTF_8_INIT);
    pub const UTF_16LE: Encoding = Encoding::Label(&encoding_rs::UTF_16LE_INIT);
    pub const UTF_16BE: Encoding = Encoding::Label(&encoding_rs::UTF_16BE_INIT);
    pub const WINDOWS_1252: Encoding = Encoding::Label(&encoding_rs::WINDOWS_1252_INIT);

    pub fn name(self) -> &'static str {
        match self {
            Encoding::Ascii => "ascii",
            Encoding::Latin1 => "latin-1",
            Encoding::Utf8Sig => "utf-8-sig",
            Encoding::Utf16 => "utf-16",
            Encoding::Label(encoding) => encoding.name(),
        }
    }

    /// Decode `bytes` into a String under this encoding; malformed input is an error
    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Encoding::Ascii => {
                let valid = encoding_rs::Encoding::ascii_valid_up_to(bytes);
                if valid < bytes.len() {
                    return Err(self.error(format!(
                        "byte 0x{:02x} at position {} is out of range",
                        bytes[valid], valid
                    )));
                }
                Ok(encoding_rs::mem::decode_latin1(bytes).into_owned())
            }
            Encoding::Latin1 => Ok(encoding_rs::mem::decode_latin1(bytes).into_owned()),
            Encoding::Utf8Sig => {
                let body = bytes.strip_prefix(b"\xef\xbb\xbf").unwrap_or(bytes);
                self.decode_with(encoding_rs::UTF_8, body)
            }
            Encoding::Utf16 => match encoding_rs::Encoding::for_bom(bytes) {
                Some((encoding, bom_len)) if encoding == encoding_rs::UTF_16LE || encoding == encoding_rs::UTF_16BE => {
                    self.decode_with(encoding, &bytes[bom_len..])
                }
                _ => self.decode_with(encoding_rs::UTF_16LE, bytes),
            },
            Encoding::Label(encoding) => self.decode_with(encoding, bytes),
        }
    }

    fn decode_with(self, encoding: &'static encoding_rs::Encoding, bytes: &[u8]) -> Result<String> {
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| self.error(format!("malformed {} data", encoding.name())))
    }

    fn error(self, reason: String) -> Error {
        Error::Decode {
            encoding: self.name().to_string(),
            reason,
        }
    }
}

/// Python codec aliases that WHATWG labels lack or map differently
fn python_codec(normalized: &str) -> Option<Encoding> {
    let encoding = match normalized {
        "utf-8" | "utf8" | "u8" | "utf" | "cp65001" => Encoding::UTF_8,
        "utf-8-sig" | "utf8-sig" => Encoding::Utf8Sig,
        "utf-16" | "utf16" | "u16" => Encoding::Utf16,
        "utf-16-le" | "utf-16le" | "utf16le" => Encoding::UTF_16LE,
        "utf-16-be" | "utf-16be" | "utf16be" => Encoding::UTF_16BE,
        "ascii" | "us-ascii" | "646" => Encoding::Ascii,
        "latin-1" | "latin1" | "latin" | "iso-8859-1" | "iso8859-1" | "8859" | "cp819" | "l1" => Encoding::Latin1,
        _ => return None,
    };
    Some(encoding)
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let normalized = trimmed.to_lowercase().replace('_', "-");

        if let Some(encoding) = python_codec(&normalized) {
            return Ok(encoding);
        }

        [trimmed, normalized.as_str()]
            .into_iter()
            .filter_map(|label| encoding_rs::Encoding::for_label(label.as_bytes()))
            // the replacement encoding only exists to refuse legacy labels
            .find(|encoding| *encoding != encoding_rs::REPLACEMENT)
            .map(Encoding::Label)
            .ok_or_else(|| Error::Decode {
                encoding: s.to_string(),
                reason: "unknown encoding".to_string(),
            })
    }
}

impl TryFrom<String> for Encoding {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Encoding> for String {
    fn from(encoding: Encoding) -> Self {
        encoding.name().to_string()
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_python_names() {
        assert_eq!("utf-8".parse::<Encoding>().unwrap(), Encoding::UTF_8);
        assert_eq!("UTF8".parse::<Encoding>().unwrap(), Encoding::UTF_8);
        assert_eq!("utf_8".parse::<Encoding>().unwrap(), Encoding::UTF_8);
        assert_eq!("US-ASCII".parse::<Encoding>().unwrap(), Encoding::Ascii);
        assert_eq!("iso-8859-1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("latin_1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("L1".parse::<Encoding>().unwrap(), Encoding::Latin1);
        assert_eq!("utf-8-sig".parse::<Encoding>().unwrap(), Encoding::Utf8Sig);
        assert_eq!("utf-16".parse::<Encoding>().unwrap(), Encoding::Utf16);
        assert_eq!("utf-16le".parse::<Encoding>().unwrap(), Encoding::UTF_16LE);
        assert_eq!("utf_16_be".parse::<Encoding>().unwrap(), Encoding::UTF_16BE);
    }

    #[test]
    fn test_parse_whatwg_labels() {
        assert_eq!("cp1252".parse::<Encoding>().unwrap(), Encoding::WINDOWS_1252);
        assert_eq!("Windows-1252".parse::<Encoding>().unwrap(), Encoding::WINDOWS_1252);
        assert_eq!(
            "shift_jis".parse::<Encoding>().unwrap(),
            Encoding::Label(encoding_rs::SHIFT_JIS)
        );
        assert_eq!("gbk".parse::<Encoding>().unwrap(), Encoding::Label(encoding_rs::GBK));
    }

    #[test]
    fn test_unknown_name() {
        let err = "ebcdic".parse::<Encoding>().unwrap_err();
        assert!(matches!(err, Error::Decode { ref encoding, .. } if encoding == "ebcdic"));
    }

    #[test]
    fn test_replacement_labels_are_unknown() {
        assert!("iso-2022-kr".parse::<Encoding>().is_err());
    }

    #[test]
    fn test_utf8_invalid_bytes() {
        let err = Encoding::UTF_8.decode(b"\xff\xfe").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_utf8_keeps_bom_but_sig_strips_it() {
        assert_eq!(Encoding::UTF_8.decode(b"\xef\xbb\xbfhi").unwrap(), "\u{feff}hi");
        assert_eq!(Encoding::Utf8Sig.decode(b"\xef\xbb\xbfhi").unwrap(), "hi");
        assert_eq!(Encoding::Utf8Sig.decode(b"hi").unwrap(), "hi");
    }

    #[test]
    fn test_ascii_rejects_high_bytes() {
        assert_eq!(Encoding::Ascii.decode(b"plain").unwrap(), "plain");
        let err = Encoding::Ascii.decode(b"caf\xe9").unwrap_err();
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn test_latin1_is_iso_8859_1() {
        assert_eq!(Encoding::Latin1.decode(b"caf\xe9").unwrap(), "café");
        // 0x80 is a C1 control in ISO-8859-1, the euro sign in windows-1252
        assert_eq!(Encoding::Latin1.decode(b"\x80").unwrap(), "\u{80}");
        assert_eq!(Encoding::WINDOWS_1252.decode(b"\x80").unwrap(), "€");
    }

    #[test]
    fn test_utf16_explicit_order() {
        assert_eq!(Encoding::UTF_16LE.decode(&[0x68, 0x00, 0x69, 0x00]).unwrap(), "hi");
        assert_eq!(Encoding::UTF_16BE.decode(&[0x00, 0x68, 0x00, 0x69]).unwrap(), "hi");
        assert!(Encoding::UTF_16LE.decode(&[0x68]).is_err());
        // unpaired high surrogate
        assert!(Encoding::UTF_16LE.decode(&[0x00, 0xd8]).is_err());
    }

    #[test]
    fn test_utf16_sniffs_bom() {
        assert_eq!(Encoding::Utf16.decode(&[0xff, 0xfe, 0x68, 0x00, 0x69, 0x00]).unwrap(), "hi");
        assert_eq!(Encoding::Utf16.decode(&[0xfe, 0xff, 0x00, 0x68, 0x00, 0x69]).unwrap(), "hi");
        assert_eq!(Encoding::Utf16.decode(&[0x68, 0x00, 0x69, 0x00]).unwrap(), "hi");
    }

    #[test]
    fn test_serde_uses_names() {
        let yaml = serde_yaml::to_string(&Encoding::Latin1).unwrap();
        assert_eq!(yaml.trim(), "latin-1");
        let parsed: Encoding = serde_yaml::from_str("UTF-16-LE").unwrap();
        assert_eq!(parsed, Encoding::UTF_16LE);
        let parsed: Encoding = serde_yaml::from_str("cp1252").unwrap();
        assert_eq!(parsed, Encoding::WINDOWS_1252);
    }

    #[test]
    fn test_display_round_trips() {
        for encoding in [Encoding::UTF_8, Encoding::Utf16, Encoding::Latin1, Encoding::WINDOWS_1252] {
            assert_eq!(encoding.to_string().parse::<Encoding>().unwrap(), encoding);
        }
    }
}
