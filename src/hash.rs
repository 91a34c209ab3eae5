//! Bit extraction from identicon hashes.
//!
//! A hash is any byte slice. Everything an icon looks like is read out of it
//! four bits at a time ("octets", indexed in half-bytes) plus one 28-bit hue
//! taken from its tail.

use sha1::{Digest, Sha1};

use crate::error::{Error, Result};

/// Number of trailing bytes that feed [`get_hue`].
pub const HUE_BYTES: usize = 4;

const HUE_MASK: u32 = 0x0FFF_FFFF;

/// Returns the 4-bit value at half-byte `index` of `hash`.
///
/// Even indices select the high nibble of byte `index / 2`, odd indices the
/// low nibble.
///
/// # Errors
///
/// [`Error::HashTooShort`] if `index / 2` is past the end of `hash`.
///
/// # Example
///
/// ```
/// use hashicon::hash::get_octet;
///
/// let hash = [0xAB, 0xCD];
/// assert_eq!(get_octet(&hash, 0).unwrap(), 0xA);
/// assert_eq!(get_octet(&hash, 1).unwrap(), 0xB);
/// assert_eq!(get_octet(&hash, 3).unwrap(), 0xD);
/// ```
pub fn get_octet(hash: &[u8], index: usize) -> Result<u8> {
    let required = index / 2 + 1;
    if hash.len() < required {
        return Err(Error::HashTooShort {
            required,
            actual: hash.len(),
        });
    }
    Ok(nibble(hash, index))
}

/// Unchecked variant of [`get_octet`] for callers that validated the length.
pub(crate) fn nibble(hash: &[u8], index: usize) -> u8 {
    let byte = hash[index / 2];
    if index % 2 == 0 { byte >> 4 } else { byte & 0x0F }
}

/// Derives a hue in `[0, 1]` from the last four bytes of `hash`.
///
/// The bytes are read big-endian regardless of host byte order, masked to
/// their low 28 bits and divided by `0x0FFF_FFFF`. Only the all-ones tail
/// reaches exactly `1.0`, which sits on the same point of the color wheel as
/// `0.0`.
///
/// The quotient is computed in `f64` and rounded once to the nearest `f32`.
/// Dividing in `f32` instead would round the 28-bit numerator first and can
/// land one ulp away.
///
/// # Errors
///
/// [`Error::HashTooShort`] if `hash` holds fewer than four bytes.
pub fn get_hue(hash: &[u8]) -> Result<f32> {
    let Some(start) = hash.len().checked_sub(HUE_BYTES) else {
        return Err(Error::HashTooShort {
            required: HUE_BYTES,
            actual: hash.len(),
        });
    };
    let mut tail = [0u8; HUE_BYTES];
    tail.copy_from_slice(&hash[start..]);
    let value = u32::from_be_bytes(tail) & HUE_MASK;
    Ok((f64::from(value) / f64::from(HUE_MASK)) as f32)
}

/// Hashes arbitrary identity data (a user name, an email address) with SHA-1.
///
/// Generation never hashes on its own; this is the usual way to turn an
/// identity into a hash suitable for it.
pub fn digest(value: impl AsRef<[u8]>) -> [u8; 20] {
    Sha1::digest(value.as_ref()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn octets_alternate_high_and_low_nibbles() {
        let hash = [0x12, 0x34, 0x56];
        let octets: Vec<u8> = (0..6).map(|i| get_octet(&hash, i).unwrap()).collect();
        assert_eq!(octets, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn octets_match_nibbles_for_every_byte() {
        let hash: Vec<u8> = (0..=255u8).collect();
        for (i, byte) in hash.iter().enumerate() {
            assert_eq!(get_octet(&hash, 2 * i).unwrap(), byte >> 4);
            assert_eq!(get_octet(&hash, 2 * i + 1).unwrap(), byte & 0x0F);
        }
    }

    #[test]
    fn octet_past_end_fails() {
        let hash = [0u8; 5];
        assert!(get_octet(&hash, 9).is_ok());
        match get_octet(&hash, 10) {
            Err(Error::HashTooShort { required, actual }) => {
                assert_eq!(required, 6);
                assert_eq!(actual, 5);
            }
            other => panic!("expected HashTooShort, got {other:?}"),
        }
        assert!(get_octet(&[], 0).is_err());
    }

    #[test]
    fn hue_reads_tail_big_endian() {
        let hash = [0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01];
        let expected = 1.0 / f64::from(HUE_MASK);
        assert!((f64::from(get_hue(&hash).unwrap()) - expected).abs() < 1e-12);

        // Only the low 28 bits count.
        let masked = [0xF0, 0x00, 0x00, 0x00];
        assert_eq!(get_hue(&masked).unwrap(), 0.0);
    }

    #[test]
    fn hue_is_rounded_once() {
        // 0x01234569 / 0x0FFFFFFF rounds to 0x3d91a2b5; f32 division gives 0x3d91a2b4.
        assert_eq!(get_hue(&[0x01, 0x23, 0x45, 0x69]).unwrap().to_bits(), 0x3d91_a2b5);
    }

    #[test]
    fn hue_ignores_leading_bytes() {
        let a = [0x01, 0x02, 0x03, 0x04, 0x9A, 0xBC, 0xDE, 0xF0];
        let b = [0xFF, 0xEE, 0xDD, 0xCC, 0x9A, 0xBC, 0xDE, 0xF0];
        assert_eq!(get_hue(&a).unwrap(), get_hue(&b).unwrap());
    }

    #[test]
    fn hue_stays_in_unit_interval() {
        for seed in 0..=255u8 {
            let hash = digest([seed]);
            let hue = get_hue(&hash).unwrap();
            assert!((0.0..=1.0).contains(&hue), "hue {hue} out of range");
        }
        assert_eq!(get_hue(&[0x0F, 0xFF, 0xFF, 0xFF]).unwrap(), 1.0);
    }

    #[test]
    fn hue_requires_four_bytes() {
        assert!(get_hue(&[1, 2, 3]).is_err());
        assert!(get_hue(&[1, 2, 3, 4]).is_ok());
    }

    #[test]
    fn digest_is_sha1() {
        let hash = digest("abc");
        assert_eq!(&hash[..4], &[0xA9, 0x99, 0x3E, 0x36]);
        assert_eq!(hash[19], 0x9D);
    }
}
