/// Side length of the square board. Coordinates run from 1 to `BOARD_SIZE`.
pub const BOARD_SIZE: i32 = 6;
pub const NUM_CELLS: usize = (BOARD_SIZE * BOARD_SIZE) as usize;
pub const NUM_SHIPS: usize = 7;
/// Ship lengths in placement order.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];
/// Longest ship the board accepts.
pub const MAX_SHIP_LENGTH: usize = 3;
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);
/// Random placement attempts allowed per ship before it is abandoned.
pub const MAX_TRY_COUNT: usize = 5_000;
/// Cosmetic pause before the computer's move is revealed.
pub const AI_DELAY_MS: u64 = 1_000;

const fn fleet_cells(fleet: &[usize]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i];
        i += 1;
    }
    total
}
