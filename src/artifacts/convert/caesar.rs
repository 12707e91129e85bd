pub const DEFAULT_SHIFT: i32 = 3;

/// Rotates ASCII letters by `shift` places; everything else passes through.
pub fn caesar(text: &str, shift: i32, decrypt: bool) -> String {
    let shift = shift.rem_euclid(26) as u8;
    let shift = if decrypt { (26 - shift) % 26 } else { shift };

    text.chars()
        .map(|c| match c {
            'A'..='Z' => rotate(c, b'A', shift),
            'a'..='z' => rotate(c, b'a', shift),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    (((c as u8 - base + shift) % 26) + base) as char
}
