/// Number of leading segments that are equal in both sequences.
/// Segments are compared as a whole, i.e., "foo" and "foobar" have no common prefix.
pub fn common_prefix_len<T: PartialEq>(left: &[T], right: &[T]) -> usize {
    left.iter()
        .zip(right)
        .take_while(|(l, r)| l == r)
        .count()
}

#[test]
fn test() {
    let empty: [&str; 0] = [];
    assert_eq!(common_prefix_len(&empty, &empty), 0, "empty names");
    assert_eq!(common_prefix_len(&empty, &["a"]), 0, "one empty name");
    assert_eq!(common_prefix_len(&["a", "b"], &["a", "b"]), 2, "equal names");
    assert_eq!(common_prefix_len(&["a"], &["a", "b", "c"]), 1, "left is prefix of right");
    assert_eq!(common_prefix_len(&["a", "b", "c"], &["a"]), 1, "right is prefix of left");
    assert_eq!(common_prefix_len(&["a", "b", "c"], &["a", "x", "c"]), 1, "diverging after the first segment");
    assert_eq!(common_prefix_len(&["foo"], &["foobar"]), 0, "segments are compared as a whole");
    assert_eq!(common_prefix_len(&["", "usr"], &["", "lib"]), 1, "empty segments are ordinary segments");
}
