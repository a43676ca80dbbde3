//! Amount-in-words conversion using the Indian numbering system

/// English number names (1-19); index 0 is unused
const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

/// English tens names; indexes 0 and 1 are unused
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a whole currency amount to English words
///
/// Grouping follows the Indian numbering system (hundred, thousand, lakh).
/// Amounts of one crore (10,000,000) and above fall back to the plain digit
/// string; receipts have never carried such amounts and the cap is kept so
/// existing output stays stable.
///
/// # Examples
/// ```
/// use receipt_core::words::amount_in_words;
/// assert_eq!(amount_in_words(0), "Zero");
/// assert_eq!(amount_in_words(5000), "Five Thousand");
/// assert_eq!(amount_in_words(100000), "One Lakh");
/// ```
pub fn amount_in_words(amount: u64) -> String {
    match amount {
        0 => "Zero".to_string(),
        1..=19 => ONES[amount as usize].to_string(),
        20..=99 => {
            let rest = amount % 10;
            if rest == 0 {
                TENS[(amount / 10) as usize].to_string()
            } else {
                format!("{} {}", TENS[(amount / 10) as usize], ONES[rest as usize])
            }
        }
        100..=999 => {
            let rest = amount % 100;
            if rest == 0 {
                format!("{} Hundred", ONES[(amount / 100) as usize])
            } else {
                format!(
                    "{} Hundred and {}",
                    ONES[(amount / 100) as usize],
                    amount_in_words(rest)
                )
            }
        }
        1_000..=99_999 => {
            let rest = amount % 1_000;
            if rest == 0 {
                format!("{} Thousand", amount_in_words(amount / 1_000))
            } else {
                format!(
                    "{} Thousand {}",
                    amount_in_words(amount / 1_000),
                    amount_in_words(rest)
                )
            }
        }
        100_000..=9_999_999 => {
            let rest = amount % 100_000;
            if rest == 0 {
                format!("{} Lakh", amount_in_words(amount / 100_000))
            } else {
                format!(
                    "{} Lakh {}",
                    amount_in_words(amount / 100_000),
                    amount_in_words(rest)
                )
            }
        }
        _ => amount.to_string(),
    }
}
