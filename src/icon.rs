//! ICO container helpers
//!
//! Encoding goes through `image::codecs::ico`, one PNG-compressed entry per
//! frame. Reading only walks the directory; entry payloads are never decoded.

use crate::{Error, Result};

const HEADER_LEN: usize = 6;
const ENTRY_LEN: usize = 16;
const ICO_TYPE: u16 = 1;

/// Largest edge an ICO directory entry can describe.
pub const MAX_ICO_EDGE: u32 = 256;

/// Bundle `frames` into a single multi-resolution `.ico`.
#[cfg(feature = "raster")]
pub fn encode(frames: &[image::RgbaImage]) -> Result<Vec<u8>> {
    use image::codecs::ico::{IcoEncoder, IcoFrame};
    use image::ExtendedColorType;

    let mut entries = Vec::with_capacity(frames.len());
    for frame in frames {
        let (w, h) = frame.dimensions();
        if w == 0 || h == 0 || w > MAX_ICO_EDGE || h > MAX_ICO_EDGE {
            return Err(Error::InvalidSize {
                size: w.max(h),
                reason: "ico entries must be between 1 and 256px",
            });
        }
        entries.push(IcoFrame::as_png(frame.as_raw(), w, h, ExtendedColorType::Rgba8)?);
    }

    let mut out = Vec::new();
    IcoEncoder::new(&mut out).encode_images(&entries)?;
    Ok(out)
}

/// Read the `(width, height)` of every entry in an `.ico` directory, in file order.
pub fn entry_sizes(bytes: &[u8]) -> Result<Vec<(u32, u32)>> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::Container(format!(
            "{} bytes is too short for an icon header",
            bytes.len()
        )));
    }

    let reserved = u16::from_le_bytes([bytes[0], bytes[1]]);
    let kind = u16::from_le_bytes([bytes[2], bytes[3]]);
    let count = usize::from(u16::from_le_bytes([bytes[4], bytes[5]]));
    if reserved != 0 || kind != ICO_TYPE {
        return Err(Error::Container(format!(
            "not an icon file (reserved={reserved}, type={kind})"
        )));
    }

    let needed = HEADER_LEN + count * ENTRY_LEN;
    if bytes.len() < needed {
        return Err(Error::Container(format!(
            "directory declares {count} entries but file has {} bytes",
            bytes.len()
        )));
    }

    // A stored edge of 0 means 256
    let edge = |b: u8| if b == 0 { MAX_ICO_EDGE } else { u32::from(b) };

    Ok(bytes[HEADER_LEN..needed]
        .chunks_exact(ENTRY_LEN)
        .map(|entry| (edge(entry[0]), edge(entry[1])))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_truncated_header() {
        assert!(matches!(entry_sizes(&[0, 0, 1]), Err(Error::Container(_))));
    }

    #[test]
    fn rejects_cursor_files() {
        // type 2 is .cur
        let bytes = [0, 0, 2, 0, 0, 0];
        assert!(matches!(entry_sizes(&bytes), Err(Error::Container(_))));
    }

    #[test]
    fn rejects_short_directory() {
        let bytes = [0, 0, 1, 0, 2, 0, 16, 16];
        assert!(matches!(entry_sizes(&bytes), Err(Error::Container(_))));
    }

    #[test]
    fn zero_edge_reads_as_256() {
        let mut bytes = vec![0, 0, 1, 0, 2, 0];
        bytes.extend_from_slice(&[16, 16, 0, 0, 1, 0, 32, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        bytes.extend_from_slice(&[0, 0, 0, 0, 1, 0, 32, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(entry_sizes(&bytes).unwrap(), vec![(16, 16), (256, 256)]);
    }

    #[cfg(feature = "raster")]
    #[test]
    fn encode_round_trips_directory() {
        let frames: Vec<image::RgbaImage> = [16, 48, 256]
            .iter()
            .map(|&s| image::RgbaImage::from_pixel(s, s, image::Rgba([34, 197, 94, 255])))
            .collect();
        let bytes = encode(&frames).unwrap();
        assert_eq!(entry_sizes(&bytes).unwrap(), vec![(16, 16), (48, 48), (256, 256)]);
    }

    #[cfg(feature = "raster")]
    #[test]
    fn encode_rejects_oversized_frames() {
        let frame = image::RgbaImage::new(512, 512);
        assert!(matches!(
            encode(&[frame]),
            Err(Error::InvalidSize { size: 512, .. })
        ));
    }
}
