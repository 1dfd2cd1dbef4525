mod tests {
    use myrtio_message_torch::DisplayMode;

    #[test]
    fn test_display_mode_from_raw() {
        assert_eq!(DisplayMode::from_raw(0), Some(DisplayMode::Off));
        assert_eq!(DisplayMode::from_raw(1), Some(DisplayMode::Torch));
        assert_eq!(DisplayMode::from_raw(2), Some(DisplayMode::ColorCycle));
        assert_eq!(DisplayMode::from_raw(3), Some(DisplayMode::Lamp));
        assert_eq!(DisplayMode::from_raw(4), None);
    }

    #[test]
    fn test_display_mode_as_raw() {
        assert_eq!(DisplayMode::Lamp.as_raw(), 3);
        assert_eq!(DisplayMode::Off.as_raw(), 0);
    }

    #[test]
    fn test_display_mode_parse_color_cycle() {
        assert_eq!(
            DisplayMode::parse_from_str("color_cycle"),
            Some(DisplayMode::ColorCycle)
        );
    }

    #[test]
    fn test_display_mode_as_str_torch() {
        assert_eq!(DisplayMode::Torch.as_str(), "torch");
    }

    #[test]
    fn test_display_mode_parse_unknown() {
        assert_eq!(DisplayMode::parse_from_str("disco"), None);
    }
}
