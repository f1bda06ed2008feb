//! Display helpers for the roster table

/// Format ARR as whole dollars with thousands separators, e.g. `$120,000`
pub fn format_arr(arr: u64) -> String {
    let digits = arr.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a health score out of ten, e.g. `8.4 / 10`
pub fn format_score(score: f64) -> String {
    format!("{:.1} / 10", score)
}
