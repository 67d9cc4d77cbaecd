/// NMEA checksum: XOR of every byte between `$` and `*` (both excluded),
/// formatted as two uppercase hex digits.
pub fn checksum(payload: &str) -> String {
    let xor = payload.bytes().fold(0u8, |acc, byte| acc ^ byte);
    format!("{:02X}", xor)
}

/// Frames a sentence body as `$<body>*<checksum>\r\n`
pub(crate) fn frame(body: &str) -> String {
    format!("${}*{}\r\n", body, checksum(body))
}

#[cfg(test)]
mod test {
    use super::{checksum, frame};

    #[test]
    fn test_checksum() {
        assert_eq!(
            checksum("GPRMC,095940.000,A,5432.216088,N,01832.664132,E,0.019,0.00,130720,,,A"),
            "59"
        );
        assert_eq!(checksum("GPHDT,123.1,T"), "34");
    }

    #[test]
    fn test_checksum_padding() {
        // identical bytes cancel out
        assert_eq!(checksum("AA"), "00");
        assert_eq!(checksum(""), "00");
        assert_eq!(checksum("\x0f"), "0F");
    }

    #[test]
    fn test_frame() {
        assert_eq!(frame("GPHDT,123.1,T"), "$GPHDT,123.1,T*34\r\n");
    }
}
