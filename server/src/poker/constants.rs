pub const NUM_SUITS: usize = 4;
/// Sized for direct indexing by high-Ace rank values (2..=14), with a spare
/// slot at index 1 used by the wheel-straight check (Ace counted as low).
pub const RANK_COUNT_ARRAY_SIZE: usize = 15;
