// src/exec/prefix.rs

/// Width used to zero-pad the invocation number: the number of decimal
/// digits in `count`, or no padding for unbounded runs.
pub fn pad_width(count: Option<u64>) -> usize {
    count.map_or(0, |n| n.to_string().len())
}

/// Format the `-v` prefix written before invocation `index` starts.
pub fn verbose_prefix(index: u64, width: usize) -> String {
    format!("{index:0width$}: ")
}
