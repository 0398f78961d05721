/// Alphabets the generic generator must refuse.
#[allow(dead_code)]
pub fn invalid_alphabets() -> Vec<String> {
    [
        String::new(),
        "x".repeat(65), // one character more than a chunk can address
        "abcdéf".to_string(), // non ASCII
        "ab\u{1F600}".to_string(),
    ]
    .to_vec()
}

/// Valid alphabets, including some with repeated characters.
#[allow(dead_code)]
pub fn valid_alphabets() -> Vec<String> {
    [
        "a".to_string(),
        "01".to_string(),
        "ACGT".to_string(),
        "aab".to_string(),
        randstr::LOWER_BYTES.to_string(),
        randstr::SAFE_BYTES.to_string(),
        format!("{}-_", randstr::SAFE_BYTES),
    ]
    .to_vec()
}
