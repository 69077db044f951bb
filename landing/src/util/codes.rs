//! Secret-code table and QR image lookup.
//!
//! DESIGN
//! ======
//! The redeemable codes are a fixed, compiled-in table. Each code maps to
//! exactly one QR image under `imagesyh/`, so the table doubles as the QR
//! lookup and the two can never drift apart.

#[cfg(test)]
#[path = "codes_test.rs"]
mod codes_test;

/// Every code the form accepts.
pub const VALID_CODES: [&str; 22] = [
    "1", "6", "7", "8", "9", "105", "108", "111", "118", "123", "211", "456", "520", "555", "654", "666", "678", "777",
    "888", "996", "998", "999",
];

/// Shown on the success page when the code has no QR image.
pub const PLACEHOLDER_QR: &str = "https://via.placeholder.com/200x200?text=Game+CDK";

/// Success-page instruction below the QR image.
pub const SUCCESS_INSTRUCTION: &str = "请长按二维码识别或截图保存，使用微信扫描二维码领取奖励。";

/// Success-page footer.
pub const SUCCESS_FOOTER: &str = "© 2025 游戏展示";

/// Outcome of checking a submitted code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Nothing but whitespace was entered.
    Empty,
    /// Known code; navigate to `redirect`.
    Accepted { code: String, redirect: String },
    /// Unknown code.
    Rejected,
}

/// Whether `code` (already trimmed) is in the table.
#[must_use]
pub fn is_valid(code: &str) -> bool {
    VALID_CODES.contains(&code)
}

/// Check raw form input against the table.
#[must_use]
pub fn verify(raw: &str) -> Verdict {
    let code = raw.trim();
    if code.is_empty() {
        return Verdict::Empty;
    }
    if !is_valid(code) {
        return Verdict::Rejected;
    }
    // Table entries are plain digits, so the query value needs no escaping.
    Verdict::Accepted { code: code.to_owned(), redirect: format!("success.html?code={code}") }
}

/// QR image for the code carried to the success page.
#[must_use]
pub fn qr_image_for(raw: &str) -> String {
    let code = raw.trim();
    if is_valid(code) { format!("imagesyh/{code}.jpg") } else { PLACEHOLDER_QR.to_owned() }
}
