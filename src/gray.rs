//! Reflected binary Gray code.
//!
//! Rows and columns of a Karnaugh map are ordered by the [Gray code][gray-code],
//! so that two neighbouring cells (including the ones across the edge of the grid)
//! differ in exactly one input bit.
//!
//! [gray-code]: https://en.wikipedia.org/wiki/Gray_code

/// [Reflected binary Gray code][gray-code] of the given bit width.
///
/// The sequence is built by reflection:
///
/// ```text
/// G(1) = [0, 1]
/// G(k) = G(k-1) ++ reverse(G(k-1)) | (1 << (k-1))
/// ```
///
/// The result has `2^bit_width` entries. The width-0 sequence is `[0]`: a single, empty code.
///
/// ```
/// use kmap_rs::gray::gray_code;
///
/// assert_eq!(gray_code(2), vec![0b00, 0b01, 0b11, 0b10]);
/// assert_eq!(gray_code(0), vec![0]);
/// ```
///
/// [gray-code]: https://en.wikipedia.org/wiki/Gray_code
pub fn gray_code(bit_width: u32) -> Vec<u32> {
    let mut codes = Vec::with_capacity(1 << bit_width);
    codes.push(0);
    for k in 0..bit_width {
        let reflected: Vec<u32> = codes.iter().rev().map(|&code| code | (1 << k)).collect();
        codes.extend(reflected);
    }
    codes
}

/// Position of `code` in the reflected Gray code sequence.
///
/// Inverse of `i -> i ^ (i >> 1)`:
///
/// ```text
/// pos(g) = g ^ (g >> 1) ^ (g >> 2) ^ ...
/// ```
pub fn gray_position(code: u32) -> usize {
    let mut pos = code;
    let mut shift = code >> 1;
    while shift != 0 {
        pos ^= shift;
        shift >>= 1;
    }
    pos as usize
}

/// Gray code at the given position, `i ^ (i >> 1)`.
pub fn gray_at(position: usize) -> u32 {
    let i = position as u32;
    i ^ (i >> 1)
}

/// Header labels: every code of [`gray_code(bit_width)`][gray_code] as a zero-padded binary string.
///
/// ```
/// use kmap_rs::gray::gray_labels;
///
/// assert_eq!(gray_labels(2), vec!["00", "01", "11", "10"]);
/// ```
pub fn gray_labels(bit_width: u32) -> Vec<String> {
    gray_code(bit_width)
        .into_iter()
        .map(|code| {
            if bit_width == 0 {
                String::new()
            } else {
                format!("{:0width$b}", code, width = bit_width as usize)
            }
        })
        .collect()
}
