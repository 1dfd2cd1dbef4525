mod tests {
    use myrtio_message_torch::color::{Rgb, add_colors, rgb_from_u32, scale_color, wheel};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    #[test]
    fn test_wheel_anchor_points() {
        assert_eq!(wheel(0), GREEN);
        assert_eq!(wheel(85), RED);
        assert_eq!(wheel(170), BLUE);
    }

    #[test]
    fn test_wheel_two_channels_sum_to_full() {
        for position in 0..=255u8 {
            let color = wheel(position);
            let sum = u16::from(color.r) + u16::from(color.g) + u16::from(color.b);
            assert_eq!(sum, 255, "position {position}");
        }
    }

    #[test]
    fn test_add_colors_saturates() {
        let a = Rgb::new(200, 10, 0);
        let b = Rgb::new(100, 20, 5);
        assert_eq!(add_colors(a, b), Rgb::new(255, 30, 5));
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(Rgb::new(255, 128, 0), 128), Rgb::new(127, 64, 0));
        assert_eq!(scale_color(RED, 0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x00FF_8001), Rgb::new(255, 128, 1));
    }
}
