//! Stable category → color mapping shared by the calendar, the lists and the report.

use sha2::{Digest, Sha256};

pub const PRIMARY_MARKER: &str = "MA";
pub const SPECIALTY_MARKER: &str = "S";
pub const GENERAL_MARKER: &str = "General";

pub const PRIMARY_COLOR: &str = "#D32F2F";
pub const SPECIALTY_COLOR: &str = "#1976D2";
pub const GENERAL_COLOR: &str = "#388E3C";

pub const PALETTE: [&str; 7] = [
    "#F57C00", "#7B1FA2", "#00796B", "#C2185B", "#5D4037", "#303F9F", "#E64A19",
];

/// Color of a category label.
///
/// Marker substrings are checked in order (primary, specialty, general); any
/// other label is hashed with SHA-256 and the digest, read as one big-endian
/// number, picks a palette entry modulo its length.
pub fn color_for(label: &str) -> &'static str {
    if label.contains(PRIMARY_MARKER) {
        return PRIMARY_COLOR;
    }
    if label.contains(SPECIALTY_MARKER) {
        return SPECIALTY_COLOR;
    }
    if label.contains(GENERAL_MARKER) {
        return GENERAL_COLOR;
    }

    let digest = Sha256::digest(label.as_bytes());
    PALETTE[digest_mod(&digest, PALETTE.len())]
}

/// `digest` interpreted as a big-endian unsigned integer, reduced modulo `m`.
fn digest_mod(digest: &[u8], m: usize) -> usize {
    let m = m as u64;
    digest
        .iter()
        .fold(0u64, |acc, b| (acc * 256 + u64::from(*b)) % m) as usize
}
