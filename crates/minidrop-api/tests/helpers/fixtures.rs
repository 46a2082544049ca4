//! Test fixtures: minidump-like blobs and hand-built multipart bodies.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

pub const BOUNDARY: &str = "----minidrop-test-boundary";

/// Bytes shaped like a minidump header followed by non-UTF-8 payload.
pub fn create_minidump(len: usize) -> Vec<u8> {
    let mut data = b"MDMP\x93\xa7\x00\x00".to_vec();
    data.extend((0..len).map(|i| (i % 251) as u8));
    data
}

/// One part of a hand-built multipart body.
pub struct RawPart<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub data: &'a [u8],
}

impl<'a> RawPart<'a> {
    pub fn text(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            file_name: None,
            data: value.as_bytes(),
        }
    }

    pub fn file(name: &'a str, file_name: &'a str, data: &'a [u8]) -> Self {
        Self {
            name,
            file_name: Some(file_name),
            data,
        }
    }
}

/// Encode parts as `multipart/form-data` using [`BOUNDARY`].
///
/// Used for shapes the typed form builder cannot express, such as an empty
/// `filename=""` attribute.
pub fn multipart_body(parts: &[RawPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part.file_name {
            Some(file_name) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                        part.name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(b"Content-Type: application/octet-stream\r\n");
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name)
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// A multipart body cut off inside its last part, with no closing boundary.
pub fn truncated_multipart_body(parts: &[RawPart<'_>]) -> Vec<u8> {
    let mut body = multipart_body(parts);
    let closing = format!("\r\n--{}--\r\n", BOUNDARY);
    body.truncate(body.len() - closing.len());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", BOUNDARY)
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).expect("gzip write");
    encoder.finish().expect("gzip finish")
}
