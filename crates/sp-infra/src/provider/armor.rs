//! Structural checks for ASCII-armored OpenPGP key blocks.

use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmorKind {
    PublicKey,
    PrivateKey,
}

impl ArmorKind {
    fn label(&self) -> &'static str {
        match self {
            ArmorKind::PublicKey => "PGP PUBLIC KEY BLOCK",
            ArmorKind::PrivateKey => "PGP PRIVATE KEY BLOCK",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ArmorError {
    #[error("missing armor header for {0}")]
    MissingHeader(&'static str),
    #[error("missing armor footer for {0}")]
    MissingFooter(&'static str),
    #[error("armor body is empty")]
    EmptyBody,
    #[error("armor body is not valid base64: {0}")]
    InvalidBody(String),
}

/// Check that `text` is a complete armored block of `kind` and return the
/// decoded binary length.
pub fn verify_armor(text: &str, kind: ArmorKind) -> Result<usize, ArmorError> {
    let label = kind.label();
    let header = format!("-----BEGIN {label}-----");
    let footer = format!("-----END {label}-----");

    let mut lines = text.lines().map(str::trim).skip_while(|l| l.is_empty());
    if lines.next() != Some(header.as_str()) {
        return Err(ArmorError::MissingHeader(label));
    }

    let mut body = String::new();
    let mut in_headers = true;
    let mut closed = false;
    for line in lines {
        if line == footer {
            closed = true;
            break;
        }
        if in_headers {
            // Armor headers ("Version: ...") end at the first blank line.
            if line.is_empty() {
                in_headers = false;
                continue;
            }
            if line.contains(": ") {
                continue;
            }
            in_headers = false;
        }
        // CRC24 checksum line
        if line.starts_with('=') {
            continue;
        }
        body.push_str(line);
    }

    if !closed {
        return Err(ArmorError::MissingFooter(label));
    }
    if body.is_empty() {
        return Err(ArmorError::EmptyBody);
    }

    let decoded = STANDARD
        .decode(body.as_bytes())
        .map_err(|e| ArmorError::InvalidBody(e.to_string()))?;
    if decoded.is_empty() {
        return Err(ArmorError::EmptyBody);
    }
    Ok(decoded.len())
}
