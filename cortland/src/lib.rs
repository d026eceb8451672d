mod system_bus;

pub mod keyboard;
pub mod video;

pub use cortland_rom::firmware::Firmware;

use std::time::Duration;

use cortland_mos6502::mos6502::MOS6502;
use system_bus::SystemBus;

/// `Cortland` is the whole machine: the 6502, 48 KiB of RAM, the firmware
/// ROM, the keyboard latch and the video-dirty flag, owned as one value.
///
/// The host drives it from the outside: feed wall-clock time to [`tick`]
/// (or instruction counts to [`step_n`]), store keystrokes with
/// [`set_key`], and read the text page back out through [`ram_byte`] when
/// [`take_video_dirty`] reports a change.
///
/// [`tick`]: Cortland::tick
/// [`step_n`]: Cortland::step_n
/// [`set_key`]: Cortland::set_key
/// [`ram_byte`]: Cortland::ram_byte
/// [`take_video_dirty`]: Cortland::take_video_dirty
pub struct Cortland {
    cpu: MOS6502,
    system: SystemBus,

    /// How much wall-clock time one instruction represents.
    instruction_period: Duration,

    /// Wall-clock time received from the host but not yet executed.
    clock_budget: Duration,
}

impl Cortland {
    /// The instruction rate `tick` paces against: a 1.023 MHz part
    /// averaging a little over three cycles per instruction.
    const INSTRUCTIONS_PER_SECOND: f64 = 315_000.0;

    /// A stalled host resumes at most this far behind real time.
    const MAX_CLOCK_BACKLOG: Duration = Duration::from_millis(100);

    /// Build the machine with RAM zeroed, the firmware mapped at
    /// `0xD000`, and reset applied.
    pub fn new(firmware: &Firmware) -> Cortland {
        let mut system = SystemBus::new(firmware);
        let mut cpu = MOS6502::new();
        cpu.reset(&mut system);

        Cortland {
            cpu,
            system,
            instruction_period: Duration::from_secs_f64(1.0 / Cortland::INSTRUCTIONS_PER_SECOND),
            clock_budget: Duration::ZERO,
        }
    }

    /// Simulate the machine's reset key: reload the program counter from
    /// the firmware's reset vector. RAM and the screen are left as they
    /// are.
    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.system);
    }

    /// Execute one instruction.
    pub fn step(&mut self) {
        self.cpu.step(&mut self.system);
    }

    /// Execute `n` instructions.
    pub fn step_n(&mut self, n: usize) {
        self.cpu.step_n(&mut self.system, n);
    }

    /// Simulate the machine forward by `delta` wall-clock time, executing
    /// however many instructions fit.
    pub fn tick(&mut self, delta: Duration) {
        self.clock_budget = (self.clock_budget + delta).min(Cortland::MAX_CLOCK_BACKLOG);

        while self.clock_budget >= self.instruction_period {
            self.clock_budget -= self.instruction_period;
            self.step();
        }
    }

    /// Store a keystroke in the keyboard latch.
    ///
    /// The byte replaces whatever was latched before; hosts normally pass
    /// it through [`keyboard::latch_byte`] so the strobe bit is set and
    /// the code is in the firmware's expected form. Call this between
    /// steps, not concurrently with them.
    pub fn set_key(&mut self, key: u8) {
        self.system.keyboard = key;
    }

    /// Read a byte of RAM without bus side effects. The video presenter
    /// walks the text page with this. `address` must lie inside the RAM
    /// region, below `0xC000`.
    pub fn ram_byte(&self, address: u16) -> u8 {
        self.system.ram[address as usize]
    }

    /// Report whether the text page was written since the last call, and
    /// clear the flag.
    pub fn take_video_dirty(&mut self) -> bool {
        std::mem::take(&mut self.system.video_dirty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Firmware whose reset vector points at `0x0600` and whose IRQ/BRK
    /// vector points back into ROM.
    fn test_firmware() -> Firmware {
        let mut bytes = vec![0u8; Firmware::SIZE];
        // Reset vector (0xFFFC) -> 0x0600
        bytes[0x2FFC] = 0x00;
        bytes[0x2FFD] = 0x06;
        // IRQ/BRK vector (0xFFFE) -> 0xD000
        bytes[0x2FFE] = 0x00;
        bytes[0x2FFF] = 0xD0;
        Firmware::from_bytes(bytes).unwrap()
    }

    fn machine_with_program(program: &[u8]) -> Cortland {
        let mut machine = Cortland::new(&test_firmware());
        machine.system.ram[0x0600..0x0600 + program.len()].copy_from_slice(program);
        machine
    }

    #[test]
    fn reset_starts_at_the_firmware_reset_vector() {
        let machine = machine_with_program(&[]);

        assert_eq!(machine.cpu.pc, 0x0600);
        assert_eq!(machine.cpu.sp, 0xFF);
    }

    #[test]
    fn keyboard_read_and_strobe_clear() {
        let mut machine = machine_with_program(&[
            0xAD, 0x00, 0xC0, // LDA $C000
            0x8D, 0x10, 0xC0, // STA $C010
        ]);
        machine.set_key(0xC1); // strobe + 'A'

        machine.step_n(2);

        assert_eq!(machine.cpu.a, 0xC1);
        assert_eq!(machine.system.keyboard, 0x41);
    }

    #[test]
    fn latched_keys_survive_until_acknowledged() {
        let mut machine = machine_with_program(&[
            0xAD, 0x00, 0xC0, // LDA $C000
            0xAD, 0x00, 0xC0, // LDA $C000
        ]);
        machine.set_key(keyboard::latch_byte(b'q'));

        machine.step_n(2);

        assert_eq!(machine.cpu.a, 0x80 | b'Q');
        assert_eq!(machine.system.keyboard, 0x80 | b'Q');
    }

    #[test]
    fn text_page_stores_mark_the_screen_dirty() {
        let mut machine = machine_with_program(&[
            0xA9, 0xC1,       // LDA #$C1
            0x8D, 0x00, 0x04, // STA $0400
        ]);
        assert!(!machine.take_video_dirty());

        machine.step_n(2);

        assert!(machine.take_video_dirty());
        assert!(!machine.take_video_dirty());
        assert_eq!(machine.ram_byte(0x0400), 0xC1);
    }

    #[test]
    fn firmware_is_read_only() {
        let mut machine = machine_with_program(&[
            0xA9, 0x55,       // LDA #$55
            0x8D, 0x34, 0xD2, // STA $D234
            0xAD, 0x34, 0xD2, // LDA $D234
        ]);

        machine.step_n(3);

        assert_eq!(machine.cpu.a, 0x00);
    }

    #[test]
    fn machine_reset_rereads_the_vector_and_keeps_ram() {
        let mut machine = machine_with_program(&[
            0xA9, 0x42, // LDA #$42
            0x85, 0x10, // STA $10
        ]);
        machine.step_n(2);

        machine.reset();

        assert_eq!(machine.cpu.pc, 0x0600);
        assert_eq!(machine.ram_byte(0x10), 0x42);
    }

    #[test]
    fn tick_converts_wall_time_into_instructions() {
        // An infinite loop: JMP $0600
        let mut machine = machine_with_program(&[0x4C, 0x00, 0x06]);

        machine.tick(Duration::from_millis(10));

        // 10 ms at 315k instructions/sec
        assert_eq!(machine.cpu.pc, 0x0600);
        assert!(machine.clock_budget < machine.instruction_period);
    }

    #[test]
    fn tick_clamps_its_backlog() {
        let mut machine = machine_with_program(&[0x4C, 0x00, 0x06]);

        // Far more than the backlog cap; must execute a bounded batch.
        machine.tick(Duration::from_secs(60));

        assert!(machine.clock_budget < machine.instruction_period);
    }

    #[test]
    fn break_runs_the_firmware_handler() {
        // BRK at 0x0600; the handler in ROM at 0xD000 is RTI.
        let mut machine = machine_with_program(&[0x00]);

        machine.step();

        assert_eq!(machine.cpu.pc, 0xD000);
    }
}
