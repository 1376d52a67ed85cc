pub const INSERT_COST: u32 = 1;
pub const REMOVE_COST: u32 = 1;
pub const REPLACE_COST: u32 = 2;

/// Weighted Levenshtein distance between two digest parts.
///
/// Two-row dynamic programming sweep: O(len(a) * len(b)) time and
/// O(len(b)) space. A replacement costs as much as a removal plus an
/// insertion, so the result never exceeds `len(a) + len(b)`.
pub fn edit_distance(a: &[u8], b: &[u8]) -> u32 {
    let mut prev: Vec<u32> = (0..=b.len() as u32).map(|j| j * INSERT_COST).collect();
    let mut cur = vec![0u32; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        cur[0] = (i as u32 + 1) * REMOVE_COST;
        for (j, &cb) in b.iter().enumerate() {
            let remove = prev[j + 1] + REMOVE_COST;
            let insert = cur[j] + INSERT_COST;
            let replace = prev[j] + if ca == cb { 0 } else { REPLACE_COST };
            cur[j + 1] = remove.min(insert).min(replace);
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    prev[b.len()]
}
