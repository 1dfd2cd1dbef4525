mod tests {
    use embassy_time::Instant;
    use myrtio_message_torch::mode::{SPARK_COLOR, TorchMode};
    use myrtio_message_torch::{
        DisplayMode, DisplayParameters, IntentChannel, Layout, PixelBuffer, Renderer,
        RendererConfig, Rgb,
    };

    const LEDS: usize = 18 * 13;
    const PER_LEVEL: usize = 13;
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_energy_color() {
        let torch = TorchMode::<LEDS>::new(Layout::TORCH, 1);
        let params = DisplayParameters::default();
        let background = Rgb::new(1, 2, 3);

        assert_eq!(torch.energy_color(0, &params, background), background);
        assert_eq!(
            torch.energy_color(128, &params, background),
            Rgb::new(38, 19, 0)
        );
        assert_eq!(
            torch.energy_color(250, &params, background),
            Rgb::new(255, 149, 0)
        );
        assert_eq!(torch.energy_color(251, &params, background), SPARK_COLOR);
        assert_eq!(SPARK_COLOR, Rgb::new(170, 170, 255));
    }

    #[test]
    fn test_energy_color_follows_bias_and_gain() {
        let torch = TorchMode::<LEDS>::new(Layout::TORCH, 1);
        let mut params = DisplayParameters::default();
        params.torch.bias = Rgb::new(0, 0, 40);
        params.torch.energy_gain.r = 0;

        let color = torch.energy_color(128, &params, BLACK);
        assert_eq!(color.r, 0);
        assert_eq!(color.g, 19);
        assert_eq!(color.b, 40);
        // Sparks ignore bias and gain
        assert_eq!(torch.energy_color(255, &params, BLACK), SPARK_COLOR);
    }

    #[test]
    fn test_upside_down_puts_flame_at_top() {
        let channel = IntentChannel::<4>::new();
        let mut params = DisplayParameters {
            mode: DisplayMode::Torch,
            upside_down: true,
            ..DisplayParameters::default()
        };
        params.torch.spark_probability = 0;
        let config = RendererConfig {
            params,
            ..RendererConfig::default()
        };
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config);
        let torch = TorchMode::<LEDS>::new(Layout::TORCH, 1);

        renderer.render(Instant::from_millis(0));

        let grid = renderer.grid();
        let frame = renderer.frame();
        let top = LEDS - PER_LEVEL;
        let mut lit = 0;
        for x in 0..PER_LEVEL {
            let color = torch.energy_color(grid.energy(x), &params, BLACK);
            let mut expected = PixelBuffer::<1>::new();
            expected.set_color_scaled(0, color, params.brightness);

            assert_eq!(frame.get_color(top + x), expected.get_color(0));
            if frame.get_color(top + x) != Some(BLACK) {
                lit += 1;
            }
            // Only the two lowest grid rows are warm after one tick
            assert_eq!(frame.get_color(x), Some(BLACK));
        }
        assert_eq!(lit, PER_LEVEL);
    }
}
