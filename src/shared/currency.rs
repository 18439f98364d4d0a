//! Rupee amount formatting using the Indian (en-IN) digit grouping:
//! the lowest three digits form one group, every group above it has two.

/// Currency symbol prefixed to formatted amounts
pub const RUPEE: &str = "₹";

/// Group the digits of `amount` the en-IN way, e.g. `1234567` -> `"12,34,567"`.
pub fn format_en_in(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format as a rupee amount, e.g. `12500` -> `"₹12,500"`.
pub fn format_rupees(amount: u64) -> String {
    format!("{}{}", RUPEE, format_en_in(amount))
}
