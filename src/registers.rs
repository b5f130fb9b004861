//! Register map of the strip controller core.
//!
//! Offsets are in words (4 bytes) from the peripheral's base address:
//!
//! | Offset | Access | Meaning                                     |
//! |--------|--------|---------------------------------------------|
//! | 0      | R      | Status, bit 0 = idle                        |
//! | 1      | R/W    | Control, bit 0 = reset, bit 1 = sync        |
//! | 2      | R/W    | Number of LEDs in the chain                 |
//! | 3 + N  | R/W    | Color of LED N, 24-bit GRB in the low bytes |

/// Status register.
pub const STATUS: usize = 0;
/// Control register. Commands are whole-word writes; each command
/// overwrites the previous one.
pub const CONTROL: usize = 1;
/// LED count register.
pub const LED_COUNT: usize = 2;
/// First per-LED color register; LED N lives at `LED_DATA + N`.
pub const LED_DATA: usize = 3;

/// Idle flag in the status register.
pub const STATUS_IDLE: u32 = 1 << 0;
/// Reset command in the control register.
pub const CONTROL_RESET: u32 = 1 << 0;
/// Sync command in the control register.
pub const CONTROL_SYNC: u32 = 1 << 1;

/// Word offset of the color register for LED `index`.
#[inline]
pub const fn led_data(index: usize) -> usize {
    LED_DATA + index
}
