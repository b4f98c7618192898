//! Text helpers shared by the syntax printer and the type formatter.

/// Bracket suffix for an array of the given rank (`""`, `"[]"`, `"[,]"`, ...).
#[must_use]
pub fn array_rank_suffix(rank: u32) -> String {
    match rank {
        0 => String::new(),
        1 => "[]".to_string(),
        n => {
            let mut out = String::with_capacity(n as usize + 1);
            out.push('[');
            for _ in 1..n {
                out.push(',');
            }
            out.push(']');
            out
        }
    }
}
