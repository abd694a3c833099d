//! Minimal PNG codec for 8-bit grayscale images.
//!
//! Only what the signature pad needs: non-interlaced, colour type 0,
//! bit depth 8. The decoder understands all five scanline filters.

use crate::errors::{AppError, AppResult};
use crate::signature::raster::Raster;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::io::{Read, Write};

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

pub fn encode(raster: &Raster) -> AppResult<Vec<u8>> {
    let w = raster.width() as usize;

    // every scanline is prefixed by its filter type (0 = none)
    let mut scanlines = Vec::with_capacity((w + 1) * raster.height() as usize);
    for row in raster.pixels().chunks(w.max(1)) {
        scanlines.push(0);
        scanlines.extend_from_slice(row);
    }

    let mut z = ZlibEncoder::new(Vec::new(), Compression::default());
    z.write_all(&scanlines)?;
    let idat = z.finish()?;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&raster.width().to_be_bytes());
    ihdr.extend_from_slice(&raster.height().to_be_bytes());
    ihdr.extend_from_slice(&[8, 0, 0, 0, 0]); // depth, colour, compression, filter, interlace

    let mut out = SIGNATURE.to_vec();
    write_chunk(&mut out, b"IHDR", &ihdr);
    write_chunk(&mut out, b"IDAT", &idat);
    write_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

pub fn decode(bytes: &[u8]) -> AppResult<Raster> {
    if bytes.len() < SIGNATURE.len() || bytes[..8] != SIGNATURE {
        return Err(AppError::Image("not a PNG file".into()));
    }

    let mut pos = 8;
    let mut header: Option<(u32, u32)> = None;
    let mut idat = Vec::new();

    while pos + 12 <= bytes.len() {
        let len = u32::from_be_bytes(read4(bytes, pos)) as usize;
        let kind = &bytes[pos + 4..pos + 8];
        let data_end = pos + 8 + len;
        if data_end + 4 > bytes.len() {
            return Err(AppError::Image("truncated chunk".into()));
        }
        let data = &bytes[pos + 8..data_end];

        let stored_crc = u32::from_be_bytes(read4(bytes, data_end));
        if stored_crc != chunk_crc(kind, data) {
            return Err(AppError::Image("CRC mismatch".into()));
        }

        match kind {
            b"IHDR" => {
                if data.len() != 13 {
                    return Err(AppError::Image("bad IHDR".into()));
                }
                let w = u32::from_be_bytes(read4(data, 0));
                let h = u32::from_be_bytes(read4(data, 4));
                if data[8..13] != [8, 0, 0, 0, 0] {
                    return Err(AppError::Image(
                        "only 8-bit grayscale, non-interlaced images are supported".into(),
                    ));
                }
                header = Some((w, h));
            }
            b"IDAT" => idat.extend_from_slice(data),
            b"IEND" => break,
            _ => {}
        }

        pos = data_end + 4;
    }

    let (w, h) = header.ok_or_else(|| AppError::Image("missing IHDR".into()))?;

    let stride = w as usize;
    let expected = (stride + 1)
        .checked_mul(h as usize)
        .ok_or_else(|| AppError::Image(format!("image too large: {w}x{h}")))?;

    // one byte past the expected size is enough to detect trailing data
    let mut raw = Vec::new();
    ZlibDecoder::new(&idat[..])
        .take(expected as u64 + 1)
        .read_to_end(&mut raw)
        .map_err(|e| AppError::Image(format!("corrupt image data: {e}")))?;

    if raw.len() != expected {
        return Err(AppError::Image("unexpected image data length".into()));
    }

    let mut pixels = vec![0u8; stride * h as usize];
    for y in 0..h as usize {
        let line = &raw[y * (stride + 1)..(y + 1) * (stride + 1)];
        let filter = line[0];
        let src = &line[1..];

        let (done, rest) = pixels.split_at_mut(y * stride);
        let prev = if y == 0 {
            None
        } else {
            Some(&done[(y - 1) * stride..])
        };
        unfilter(filter, src, prev, &mut rest[..stride])?;
    }

    Raster::from_pixels(w, h, pixels).ok_or_else(|| AppError::Image("size mismatch".into()))
}

fn unfilter(filter: u8, src: &[u8], prev: Option<&[u8]>, out: &mut [u8]) -> AppResult<()> {
    for i in 0..src.len() {
        let a = if i > 0 { out[i - 1] } else { 0 };
        let b = prev.map(|p| p[i]).unwrap_or(0);
        let c = if i > 0 {
            prev.map(|p| p[i - 1]).unwrap_or(0)
        } else {
            0
        };

        let predictor = match filter {
            0 => 0,
            1 => a,
            2 => b,
            3 => ((a as u16 + b as u16) / 2) as u8,
            4 => paeth(a, b, c),
            other => return Err(AppError::Image(format!("unknown filter {other}"))),
        };
        out[i] = src[i].wrapping_add(predictor);
    }
    Ok(())
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}

fn read4(bytes: &[u8], at: usize) -> [u8; 4] {
    [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]
}

fn write_chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&chunk_crc(kind, data).to_be_bytes());
}

/// CRC-32 over chunk type and data.
fn chunk_crc(kind: &[u8], data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(kind);
    hasher.update(data);
    hasher.finalize()
}
