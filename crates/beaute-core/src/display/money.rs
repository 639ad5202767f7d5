//! Currency display.

use std::fmt;

/// An amount in JPY, shown with a yen sign and thousands separators.
///
/// # Examples
///
/// ```rust
/// use beaute_core::display::Yen;
///
/// assert_eq!(Yen(50000).to_string(), "￥50,000");
/// assert_eq!(Yen(980).to_string(), "￥980");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Yen(pub u64);

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        write!(f, "￥{grouped}")
    }
}
