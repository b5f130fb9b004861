use crate::RegisterBus;
use crate::color::{Rgb, grb_to_rgb, rgb_from_u32, rgb_to_grb, rgb_to_u32};
use crate::registers;

/// Errors reported by the checked driver operations.
///
/// The raw register operations never fail; these cover the two
/// preconditions the hardware does not enforce or report itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// LED index is not below the configured LED count.
    IndexOutOfRange,
    /// The controller is busy; reconfiguring it now is hardware-undefined.
    NotIdle,
}

/// Register-file driver for the WS2812 strip controller core.
///
/// Every operation is a single register read or write (plus a pure color
/// conversion for the RGB variants); nothing buffers, blocks or polls.
/// Color writes only reach the physical chain once [`sync`](Self::sync) has
/// been issued and the controller reports idle again.
///
/// The driver is generic over [`RegisterBus`], so the same code runs
/// against the memory-mapped peripheral ([`Mmio`](crate::Mmio)) or an
/// in-memory register file:
///
/// ```
/// use ws2812_mmio::{RegisterBus, Ws2812};
///
/// struct Ram([u32; 8]);
///
/// impl RegisterBus for Ram {
///     fn read_word(&self, index: usize) -> u32 {
///         self.0[index]
///     }
///
///     fn write_word(&mut self, index: usize, value: u32) {
///         self.0[index] = value;
///     }
/// }
///
/// let mut strip = Ws2812::new(Ram([0; 8]));
/// strip.set_led_count(4);
/// strip.set_led_rgb(0, 0x11_22_33);
/// strip.sync();
/// assert_eq!(strip.led_rgb(0), 0x11_22_33);
/// ```
pub struct Ws2812<B> {
    bus: B,
}

impl<B: RegisterBus> Ws2812<B> {
    /// Wrap a register bus.
    ///
    /// The bus must cover the whole register file the chain needs: the
    /// three fixed registers plus one color word per LED.
    pub const fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Release the underlying bus.
    pub fn free(self) -> B {
        self.bus
    }

    /// Command the controller to clear the LED count and drive the output
    /// line low.
    ///
    /// The controller leaves idle while it executes; completion is observed
    /// through [`is_idle`](Self::is_idle), not by this call.
    pub fn reset(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("ws2812: reset");
        self.bus
            .write_word(registers::CONTROL, registers::CONTROL_RESET);
    }

    /// Command the controller to push the held color registers out to the
    /// physical chain.
    ///
    /// Does not wait for the refresh to finish; poll
    /// [`is_idle`](Self::is_idle) before issuing further commands.
    pub fn sync(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::trace!("ws2812: sync");
        self.bus
            .write_word(registers::CONTROL, registers::CONTROL_SYNC);
    }

    /// Whether the controller is ready to accept the next command.
    pub fn is_idle(&self) -> bool {
        self.bus.read_word(registers::STATUS) & registers::STATUS_IDLE != 0
    }

    /// Read back the control register.
    pub fn control(&self) -> u32 {
        self.bus.read_word(registers::CONTROL)
    }

    /// Configure the length of the chain.
    ///
    /// The controller must be idle; this raw operation does not check (see
    /// [`try_set_led_count`](Self::try_set_led_count)).
    pub fn set_led_count(&mut self, count: u32) {
        self.bus.write_word(registers::LED_COUNT, count);
    }

    /// Number of LEDs currently configured.
    pub fn led_count(&self) -> u32 {
        self.bus.read_word(registers::LED_COUNT)
    }

    /// Write a word verbatim to the color register of LED `index`.
    ///
    /// `index` must be below the configured LED count; out-of-range
    /// accesses are hardware-undefined, not detected here.
    pub fn set_led_word(&mut self, index: usize, word: u32) {
        self.bus.write_word(registers::led_data(index), word);
    }

    /// Read the color register of LED `index` verbatim.
    pub fn led_word(&self, index: usize) -> u32 {
        self.bus.read_word(registers::led_data(index))
    }

    /// Write a `0xRRGGBB` word to LED `index`, reordered to the GRB layout
    /// the controller expects.
    pub fn set_led_rgb(&mut self, index: usize, rgb: u32) {
        self.set_led_word(index, rgb_to_grb(rgb));
    }

    /// Read LED `index` back as a `0xRRGGBB` word.
    pub fn led_rgb(&self, index: usize) -> u32 {
        grb_to_rgb(self.led_word(index))
    }

    /// Write a typed color to LED `index`.
    pub fn set_led(&mut self, index: usize, color: Rgb) {
        self.set_led_rgb(index, rgb_to_u32(color));
    }

    /// Read LED `index` back as a typed color.
    pub fn led(&self, index: usize) -> Rgb {
        rgb_from_u32(self.led_rgb(index))
    }

    /// Write colors to LEDs `0..colors.len()`.
    ///
    /// Registers only; the physical chain does not change until
    /// [`sync`](Self::sync).
    pub fn write_slice(&mut self, colors: &[Rgb]) {
        for (index, color) in colors.iter().enumerate() {
            self.set_led(index, *color);
        }
    }

    /// Like [`set_led`](Self::set_led), but rejects indices outside the
    /// configured chain instead of touching an undefined register.
    ///
    /// Costs one extra read of the LED count register per call.
    #[allow(clippy::cast_possible_truncation)]
    pub fn try_set_led(&mut self, index: usize, color: Rgb) -> Result<(), Error> {
        if index >= self.led_count() as usize {
            return Err(Error::IndexOutOfRange);
        }
        self.set_led(index, color);
        Ok(())
    }

    /// Like [`set_led_count`](Self::set_led_count), but refuses while the
    /// controller is busy.
    pub fn try_set_led_count(&mut self, count: u32) -> Result<(), Error> {
        if !self.is_idle() {
            return Err(Error::NotIdle);
        }
        self.set_led_count(count);
        Ok(())
    }
}
