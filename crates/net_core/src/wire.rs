//! Encode/decode traits plus little-endian read/write helpers.
//!
//! Decoders consume from a shared `&mut &[u8]` cursor and fail with an error
//! on truncated input; they never panic.

use anyhow::{Result, bail};

/// Types that write themselves into a byte buffer.
pub trait WireEncode {
    fn encode(&self, out: &mut Vec<u8>);
}

/// Types that reconstruct themselves from a byte cursor.
pub trait WireDecode: Sized {
    fn decode(inp: &mut &[u8]) -> Result<Self>;
}

pub fn take<const N: usize>(inp: &mut &[u8]) -> Result<[u8; N]> {
    if inp.len() < N {
        bail!("short read");
    }
    let (a, b) = inp.split_at(N);
    *inp = b;
    let mut buf = [0u8; N];
    buf.copy_from_slice(a);
    Ok(buf)
}

pub fn get_u8(inp: &mut &[u8]) -> Result<u8> {
    Ok(take::<1>(inp)?[0])
}

pub fn get_u16(inp: &mut &[u8]) -> Result<u16> {
    Ok(u16::from_le_bytes(take::<2>(inp)?))
}

pub fn get_u32(inp: &mut &[u8]) -> Result<u32> {
    Ok(u32::from_le_bytes(take::<4>(inp)?))
}

pub fn get_i32(inp: &mut &[u8]) -> Result<i32> {
    Ok(i32::from_le_bytes(take::<4>(inp)?))
}

pub fn get_f32(inp: &mut &[u8]) -> Result<f32> {
    Ok(f32::from_le_bytes(take::<4>(inp)?))
}

pub fn get_vec3(inp: &mut &[u8]) -> Result<[f32; 3]> {
    Ok([get_f32(inp)?, get_f32(inp)?, get_f32(inp)?])
}

/// u16 length prefix then UTF-8 bytes.
pub fn get_str(inp: &mut &[u8]) -> Result<String> {
    let len = get_u16(inp)? as usize;
    if inp.len() < len {
        bail!("short string read");
    }
    let (a, b) = inp.split_at(len);
    let s = std::str::from_utf8(a)?.to_string();
    *inp = b;
    Ok(s)
}

pub fn put_vec3(out: &mut Vec<u8>, v: [f32; 3]) {
    for c in v {
        out.extend_from_slice(&c.to_le_bytes());
    }
}

pub fn put_str(out: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    let len = u16::try_from(bytes.len()).unwrap_or(u16::MAX);
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&bytes[..len as usize]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_roundtrip_and_truncation() {
        let mut buf = Vec::new();
        put_str(&mut buf, "ruby");
        let mut cur: &[u8] = &buf;
        assert_eq!(get_str(&mut cur).expect("decode"), "ruby");
        let mut short: &[u8] = &buf[..3];
        assert!(get_str(&mut short).is_err());
    }

    #[test]
    fn take_advances_the_cursor() {
        let data = [1u8, 2, 3, 4];
        let mut cur: &[u8] = &data;
        assert_eq!(take::<2>(&mut cur).expect("take"), [1, 2]);
        assert_eq!(cur, &[3, 4]);
        assert!(take::<3>(&mut cur).is_err());
    }
}
