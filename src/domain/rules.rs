/// Neighbor counts that keep a live cell alive (B3/S23)
pub const SURVIVAL: [u8; 2] = [2, 3];

/// Neighbor counts that bring a dead cell to life
pub const BIRTH: [u8; 1] = [3];

/// Pure function to compute the next state based on Conway's rules:
/// 1. Live cell with 2-3 neighbors survives
/// 2. Dead cell with exactly 3 neighbors becomes alive
/// 3. All other cases result in death
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        SURVIVAL.contains(&neighbors)
    } else {
        BIRTH.contains(&neighbors)
    }
}
