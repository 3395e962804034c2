/// Whether the machine this code runs on is little-endian.
pub fn is_native_little_endian() -> bool {
    cfg!(target_endian = "little")
}
