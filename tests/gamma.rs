mod tests {
    use myrtio_message_torch::gamma::{GammaTable, LEVELS};

    const EXPECTED: [u8; LEVELS] = [
        0, 1, 1, 2, 3, 4, 6, 7, 9, 10, 13, 15, 18, 21, 24, 28, 33, 38, 44, 50, 58, 67, 77, 88,
        101, 115, 132, 150, 172, 196, 224, 255,
    ];

    #[test]
    fn test_pwm_table_matches_curve() {
        assert_eq!(GammaTable::pwm().as_slice(), &EXPECTED);
    }

    #[test]
    fn test_energy_table_matches_curve() {
        assert_eq!(GammaTable::energy_to_brightness().as_slice(), &EXPECTED);
    }

    #[test]
    fn test_table_is_monotonic() {
        let table = GammaTable::pwm();
        for pair in table.as_slice().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_lookup_saturates() {
        let table = GammaTable::pwm();
        assert_eq!(table.get(31), 255);
        assert_eq!(table.get(200), 255);
        assert_eq!(table.map8(255), 255);
        assert_eq!(table.map8(7), 0);
        assert_eq!(table.map8(8), 1);
    }

    #[test]
    fn test_linear_exponent_is_close_to_linear() {
        let table = GammaTable::exponential(0.001, 31);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(16), 16);
        assert_eq!(table.get(31), 31);
    }
}
