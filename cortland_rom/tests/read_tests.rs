use cortland_rom::firmware::{Error, Firmware};

/// A well-formed image with a recognizable reset vector.
fn image_with_reset_vector(vector: u16) -> Vec<u8> {
    let mut bytes = vec![0u8; Firmware::SIZE];
    let [lo, hi] = vector.to_le_bytes();
    bytes[0x2FFC] = lo;
    bytes[0x2FFD] = hi;
    bytes
}

#[test]
fn loads_an_exactly_sized_image() {
    let firmware = Firmware::from_bytes(image_with_reset_vector(0xFA62)).unwrap();

    assert_eq!(firmware.as_bytes().len(), Firmware::SIZE);
    assert_eq!(firmware.reset_vector(), 0xFA62);
}

#[test]
fn rejects_a_short_image() {
    let result = Firmware::from_bytes(vec![0u8; Firmware::SIZE - 1]);

    assert!(matches!(result, Err(Error::BadRomSize(n)) if n == Firmware::SIZE - 1));
}

#[test]
fn rejects_a_long_image() {
    let result = Firmware::from_bytes(vec![0u8; Firmware::SIZE + 512]);

    assert!(matches!(result, Err(Error::BadRomSize(n)) if n == Firmware::SIZE + 512));
}

#[test]
fn loads_an_image_from_disk() {
    let path = std::env::temp_dir().join("cortland_read_tests.rom");
    std::fs::write(&path, image_with_reset_vector(0xD000)).unwrap();

    let firmware = Firmware::from_file(&path).unwrap();

    assert_eq!(firmware.reset_vector(), 0xD000);

    std::fs::remove_file(&path).ok();
}

#[test]
fn missing_file_reports_io_error() {
    let result = Firmware::from_file("/nonexistent/cortland.rom");

    assert!(matches!(result, Err(Error::Io(_))));
}
