//! Little-endian word packing for key and ciphertext serialization

/// Append a u32 to `out` in little-endian byte order
pub fn put_u32_le(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Read the little-endian u32 starting at `offset`
///
/// Returns `None` when fewer than four bytes remain.
pub fn get_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let chunk = bytes.get(offset..end)?;
    Some(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
}

/// Append an i32 to `out` in little-endian byte order
pub fn put_i32_le(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Read the little-endian i32 starting at `offset`
pub fn get_i32_le(bytes: &[u8], offset: usize) -> Option<i32> {
    get_u32_le(bytes, offset).map(|w| w as i32)
}
