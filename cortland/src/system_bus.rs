use cortland_mos6502::mos6502::Bus;
use cortland_rom::firmware::Firmware;

/// `0x0000..0xC000` is read/write RAM.
pub(crate) const RAM_SIZE: usize = 0xC000;

/// Keyboard data: bit 7 is the strobe, bits 6..0 the latched key code.
/// Reading returns the latch unchanged.
const KBD: u16 = 0xC000;

/// Keyboard strobe acknowledge: reading or writing clears the strobe bit
/// while preserving the key code.
const KBDSTRB: u16 = 0xC010;

const KEY_STROBE: u8 = 0b1000_0000;

/// Every store to text page one has bit 10 of its address set, so this
/// single bit is a conservative "page touched" test. Addresses outside the
/// page can trip it too; the presenter re-renders the whole page either
/// way, so the over-approximation is invisible.
const TEXT_PAGE_BIT: u16 = 0x0400;

/// The machine side of the address space: 48 KiB of RAM, the 12 KiB
/// firmware ROM mapped high, and the keyboard soft switches in the I/O
/// aperture between them.
pub(crate) struct SystemBus {
    pub(crate) ram: [u8; RAM_SIZE],
    pub(crate) rom: [u8; Firmware::SIZE],
    pub(crate) keyboard: u8,
    pub(crate) video_dirty: bool,
}

impl SystemBus {
    pub(crate) fn new(firmware: &Firmware) -> SystemBus {
        let mut rom = [0; Firmware::SIZE];
        rom.copy_from_slice(firmware.as_bytes());

        SystemBus {
            ram: [0; RAM_SIZE],
            rom,
            keyboard: 0,
            video_dirty: false,
        }
    }

    /// Clear the strobe, keep the key code, and report the result.
    fn acknowledge_key(&mut self) -> u8 {
        self.keyboard &= !KEY_STROBE;
        self.keyboard
    }
}

impl Bus for SystemBus {
    fn read_u8(&mut self, address: u16) -> u8 {
        match address {
            KBD => self.keyboard,
            KBDSTRB => self.acknowledge_key(),
            0x0000..=0xBFFF => self.ram[address as usize],
            0xD000..=0xFFFF => self.rom[(address - Firmware::BASE_ADDRESS) as usize],
            // Unmodeled soft switches read as zero.
            _ => 0,
        }
    }

    fn write_u8(&mut self, address: u16, data: u8) {
        // Raised before dispatch: a reader observing the flag sees RAM at
        // or beyond the store that raised it.
        if address & TEXT_PAGE_BIT != 0 {
            self.video_dirty = true;
        }

        match address {
            KBDSTRB => {
                self.acknowledge_key();
            }
            0x0000..=0xBFFF => self.ram[address as usize] = data,
            // ROM and unmodeled I/O swallow stores.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bus() -> SystemBus {
        let firmware = Firmware::from_bytes(vec![0xEE; Firmware::SIZE]).unwrap();
        SystemBus::new(&firmware)
    }

    #[test]
    fn ram_reads_back_stores() {
        let mut bus = bus();

        bus.write_u8(0x1234, 0x42);

        assert_eq!(bus.read_u8(0x1234), 0x42);
    }

    #[test]
    fn rom_ignores_stores() {
        let mut bus = bus();

        bus.write_u8(0xD123, 0x00);

        assert_eq!(bus.read_u8(0xD123), 0xEE);
    }

    #[test]
    fn unmodeled_io_reads_zero_and_swallows_stores() {
        let mut bus = bus();

        bus.write_u8(0xC030, 0x55);

        assert_eq!(bus.read_u8(0xC030), 0x00);
    }

    #[test]
    fn keyboard_latch_reads_unchanged() {
        let mut bus = bus();
        bus.keyboard = 0xC1;

        assert_eq!(bus.read_u8(0xC000), 0xC1);
        assert_eq!(bus.keyboard, 0xC1);
    }

    #[test]
    fn strobe_acknowledge_clears_only_bit_seven() {
        let mut bus = bus();
        bus.keyboard = 0xC1;

        assert_eq!(bus.read_u8(0xC010), 0x41);
        assert_eq!(bus.keyboard, 0x41);

        bus.keyboard = 0xC1;
        bus.write_u8(0xC010, 0xFF);
        assert_eq!(bus.keyboard, 0x41);
    }

    #[test]
    fn text_page_stores_raise_the_dirty_flag() {
        let mut bus = bus();
        assert!(!bus.video_dirty);

        bus.write_u8(0x0400, 0xA0);
        assert!(bus.video_dirty);

        bus.video_dirty = false;
        bus.write_u8(0x07FF, 0xA0);
        assert!(bus.video_dirty);
    }

    /// The dirty test is a single-bit over-approximation: any address with
    /// bit 10 set trips it.
    #[test]
    fn dirty_flag_is_conservative_about_bit_ten() {
        let mut bus = bus();

        bus.write_u8(0x0C00, 0x00);
        assert!(bus.video_dirty);

        bus.video_dirty = false;
        bus.write_u8(0x0200, 0x00);
        assert!(!bus.video_dirty);
    }
}
