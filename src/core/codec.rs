use crate::domain::model::Serial;
use rand::Rng;

const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";

/// Formatted serial length: `GSIM-` + 4 + `-` + 4 + `-` + 4.
pub const SERIAL_LEN: usize = 19;

pub const PREFIX: &str = "GSIM-";

/// Compute the 4-character checksum over a payload.
///
/// 校驗和 = (payload各字元碼點總和 * 31) mod 0xFFFF，格式化為4位大寫十六進制。
/// The modulus is 0xFFFF (65535), not 0x10000. Issued serials depend on this,
/// so it must not be changed.
pub fn checksum(payload: &str) -> String {
    let code_point_sum: u64 = payload.chars().map(|c| c as u64).sum();
    format!("{:04X}", (code_point_sum * 31) % 0xFFFF)
}

/// Generate a serial using the given random number generator.
///
/// Tests pass a seeded `StdRng` here to get reproducible output.
pub fn generate_with<R: Rng>(rng: &mut R) -> Serial {
    let payload: String = (0..8)
        .map(|_| HEX_ALPHABET[rng.gen_range(0..HEX_ALPHABET.len())] as char)
        .collect();
    let check = checksum(&payload);
    Serial::new(payload, check)
}

/// Generate a serial from thread-local randomness.
pub fn generate() -> Serial {
    generate_with(&mut rand::thread_rng())
}

/// Check whether a candidate string is a well-formed serial with a matching
/// checksum. Total over arbitrary input: malformed strings yield `false`,
/// never an error.
pub fn validate(candidate: &str) -> bool {
    // 先修剪空白並轉大寫，之後才做任何檢查
    let serial = candidate.trim().to_uppercase();

    if serial.len() != SERIAL_LEN || !serial.starts_with(PREFIX) {
        return false;
    }

    let parts: Vec<&str> = serial.split('-').collect();
    if parts.len() != 4 {
        return false;
    }

    let payload = format!("{}{}", parts[1], parts[2]);
    let check_part = parts[3];

    if payload.len() != 8 || check_part.len() != 4 {
        return false;
    }

    if !payload
        .chars()
        .chain(check_part.chars())
        .all(|c| matches!(c, '0'..='9' | 'A'..='F'))
    {
        return false;
    }

    checksum(&payload) == check_part
}
