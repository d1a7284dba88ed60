//! Formats byte counts with binary (1024-based) units, rounded to whole numbers.

const SUFFIXES: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

pub fn human_size(n: u64) -> String {
    if n == 0 {
        return "0 B".to_owned();
    }
    let log2 = 63 - n.leading_zeros();
    let order = (log2 / 10) as usize;
    let value = (n as f64 / (1u64 << (order * 10)) as f64 + 0.5) as u64;
    format!("{value} {}", SUFFIXES[order])
}

#[test]
fn test_human_size() {
    assert_eq!(human_size(0), "0 B");
    assert_eq!(human_size(1), "1 B");
    assert_eq!(human_size(1023), "1023 B");
    assert_eq!(human_size(1024), "1 KB");
    assert_eq!(human_size(1066), "1 KB");
    assert_eq!(human_size(1536), "2 KB");
    assert_eq!(human_size(1024 * 1024 - 1), "1024 KB");
    assert_eq!(human_size(3 * 1024 * 1024), "3 MB");
    assert_eq!(human_size(u64::MAX), "16 EB");
}
