//! Whole-content zlib compression

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{self, Read, Write};

/// Compress UTF-8 text into a zlib stream (default level, deterministic)
pub fn deflate(text: &str) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    encoder.finish()
}

/// Decompress a zlib stream produced by [`deflate`] back into text
pub fn inflate(bytes: &[u8]) -> io::Result<String> {
    let mut decoder = ZlibDecoder::new(bytes);
    let mut text = String::new();
    decoder.read_to_string(&mut text)?;
    Ok(text)
}

/// Render bytes as a byte-string literal
///
/// Quoted with `'` unless the bytes contain `'` and no `"`, in which case `"`
/// is used and `'` stays unescaped. Printable ASCII is written verbatim; the
/// active quote, backslash, tab, newline and carriage return are escaped;
/// everything else becomes `\xNN`.
pub fn escape_bytes(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() * 2 + 3);
    out.push('b');
    out.push(quote as char);
    for &byte in bytes {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            _ if byte == quote => {
                out.push('\\');
                out.push(byte as char);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out.push(quote as char);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_is_lossless() {
        let long = "repetitive line\n".repeat(500);
        let samples: [&str; 4] = [
            "",
            "print(1)\n\ny=2",
            "unicode: \u{e9}\u{4e2d}\u{1f980}\r\n\ttabs and CRLF\r\n",
            long.as_str(),
        ];
        for text in samples {
            let compressed = deflate(text).unwrap();
            assert_eq!(inflate(&compressed).unwrap(), text);
        }
    }

    #[test]
    fn test_deflate_is_deterministic() {
        let text = "fn main() {}\n".repeat(20);
        assert_eq!(deflate(&text).unwrap(), deflate(&text).unwrap());
    }

    #[test]
    fn test_zlib_header() {
        let compressed = deflate("hello").unwrap();
        // CMF byte: deflate with a 32K window
        assert_eq!(compressed[0], 0x78);
    }

    #[test]
    fn test_escape_bytes() {
        assert_eq!(escape_bytes(b"ab"), "b'ab'");
        assert_eq!(escape_bytes(&[0x78, 0x9c, 0x00]), "b'x\\x9c\\x00'");
        assert_eq!(escape_bytes(b"say \"it's\"\\\n\t\r"), "b'say \"it\\'s\"\\\\\\n\\t\\r'");
    }

    #[test]
    fn test_escape_bytes_switches_to_double_quotes() {
        assert_eq!(escape_bytes(b"it's"), "b\"it's\"");
        assert_eq!(escape_bytes(b"\"quoted\""), "b'\"quoted\"'");
        assert_eq!(escape_bytes(&[b'\'', 0x9c]), "b\"'\\x9c\"");
    }

    #[test]
    fn test_inflate_rejects_garbage() {
        assert!(inflate(b"definitely not zlib").is_err());
    }
}
