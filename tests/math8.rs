mod tests {
    use embassy_time::Duration;
    use myrtio_message_torch::math8::{
        blend8, increase, mul_shr, progress8, quantize, reduce, scale,
    };
    use proptest::prelude::*;

    #[test]
    fn test_scale() {
        assert_eq!(scale(255, 128), 127);
        assert_eq!(scale(0, 128), 0);
        assert_eq!(scale(128, 128), 64);
        assert_eq!(scale(255, 255), 254);
        assert_eq!(scale(128, 0), 0);
    }

    #[test]
    fn test_mul_shr_saturates() {
        assert_eq!(mul_shr(200, 512, 8), 255);
        assert_eq!(mul_shr(100, 200, 8), 78);
        assert_eq!(mul_shr(100, 512, 9), 100);
        assert_eq!(mul_shr(u32::MAX, u32::MAX, 8), 255);
    }

    #[test]
    fn test_reduce() {
        assert_eq!(reduce(250, 40, 0), 210);
        assert_eq!(reduce(30, 40, 0), 0);
        assert_eq!(reduce(30, 10, 25), 25);
    }

    #[test]
    fn test_increase() {
        assert_eq!(increase(100, 30, 255), 130);
        assert_eq!(increase(250, 1000, 255), 255);
        assert_eq!(increase(100, 50, 120), 120);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_progress8() {
        assert_eq!(
            progress8(Duration::from_millis(0), Duration::from_millis(100)),
            0
        );
        assert_eq!(
            progress8(Duration::from_millis(50), Duration::from_millis(100)),
            127
        );
        assert_eq!(
            progress8(Duration::from_millis(100), Duration::from_millis(100)),
            255
        );
        assert_eq!(
            progress8(Duration::from_millis(10), Duration::from_millis(0)),
            255
        );
    }

    proptest! {
        #[test]
        fn reduce_never_below_min(value in any::<u8>(), amount in any::<u8>(), min in any::<u8>()) {
            let result = reduce(value, amount, min);
            prop_assert!(result >= min);
            prop_assert!(result <= value.max(min));
        }

        #[test]
        fn increase_never_above_max(value in any::<u8>(), amount in any::<u32>(), max in any::<u8>()) {
            let result = increase(value, amount, max);
            prop_assert!(result <= max);
            let sum = u32::from(value).saturating_add(amount);
            if sum <= u32::from(max) {
                prop_assert_eq!(u32::from(result), sum);
            }
        }

        #[test]
        fn quantize_clears_low_bits(value in any::<u8>()) {
            let result = quantize(value);
            prop_assert_eq!(result & 0x07, 0);
            prop_assert!(value - result < 8);
        }
    }
}
