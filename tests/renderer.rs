mod tests {
    use embassy_time::Instant;
    use myrtio_message_torch::{
        ControlIntent, DisplayMode, DisplayParameters, IntentChannel, Message, Renderer,
        RendererConfig, Rgb, parse_params,
    };

    const LEDS: usize = 18 * 13;
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn config(mode: DisplayMode) -> RendererConfig {
        let mut params = DisplayParameters {
            mode,
            ..DisplayParameters::default()
        };
        params.torch.spark_probability = 0;
        params.lamp_color = Rgb::new(200, 100, 40);
        RendererConfig {
            params,
            ..RendererConfig::default()
        }
    }

    fn render_times<const N: usize, const C: usize>(renderer: &mut Renderer<'_, N, C>, times: u64) {
        for tick in 0..times {
            renderer.render(Instant::from_millis(tick));
        }
    }

    #[test]
    fn test_lamp_fills_every_led() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config(DisplayMode::Lamp));

        let frame = renderer.render(Instant::from_millis(0));

        for index in 0..LEDS {
            assert_eq!(frame.get_color(index), Some(Rgb::new(192, 96, 32)));
        }
    }

    #[test]
    fn test_color_cycle_rotates_wheel() {
        let channel = IntentChannel::<4>::new();
        let mut renderer =
            Renderer::<LEDS, 4>::new(channel.receiver(), &config(DisplayMode::ColorCycle));

        let frame = renderer.render(Instant::from_millis(0));

        // wheel(1) at half brightness
        assert_eq!(frame.get_color(0), Some(Rgb::new(0, 120, 0)));
    }

    #[test]
    fn test_text_wins_over_generator() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config(DisplayMode::Lamp));
        channel.sender().submit_message(Message::decode(b"H"));

        render_times(&mut renderer, 16);

        let frame = renderer.frame();
        let band_start = 8 * 13;
        // Column 10 of the bottom text row carries the first `H` column
        assert_eq!(frame.get_color(band_start + 10), Some(Rgb::new(0, 248, 176)));
        // Below the band the lamp shows
        assert_eq!(frame.get_color(band_start - 1), Some(Rgb::new(192, 96, 32)));
        // Dark text columns show the lamp
        assert_eq!(frame.get_color(band_start), Some(Rgb::new(192, 96, 32)));
    }

    #[test]
    fn test_raised_text_band_follows_scroll() {
        let channel = IntentChannel::<4>::new();
        let mut config = config(DisplayMode::Lamp);
        config.params.text.raise_by = 14;
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config);
        channel.sender().submit_message(Message::decode(b"HI"));

        render_times(&mut renderer, 16);

        // Offset -10 puts the band two rows below the display
        assert_eq!(renderer.text().base_line(), -2);
        let frame = renderer.frame();
        // Glyph row 2 lands on the bottom LED row
        assert_eq!(frame.get_color(10), Some(Rgb::new(0, 248, 176)));
        assert_eq!(frame.get_color(4 * 13 + 10), Some(Rgb::new(0, 248, 176)));
        assert_eq!(frame.get_color(5 * 13 + 10), Some(Rgb::new(192, 96, 32)));
        // Nothing left at the unraised position
        assert_eq!(frame.get_color(8 * 13 + 10), Some(Rgb::new(192, 96, 32)));
    }

    #[test]
    fn test_off_is_dark_even_with_text() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config(DisplayMode::Off));
        channel.sender().submit_message(Message::decode(b"H"));

        render_times(&mut renderer, 16);

        assert!(renderer.text().is_active());
        for index in 0..LEDS {
            assert_eq!(renderer.frame().get_color(index), Some(BLACK));
        }
    }

    #[test]
    fn test_param_batch_applies_at_next_tick() {
        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config(DisplayMode::Torch));
        channel
            .sender()
            .try_send(ControlIntent::Params(parse_params("mode=3,lamp_red=255,lamp_green=0,lamp_blue=0")))
            .unwrap();
        assert_eq!(renderer.mode(), DisplayMode::Torch);

        let frame = renderer.render(Instant::from_millis(0));

        assert_eq!(frame.get_color(0), Some(Rgb::new(248, 0, 0)));
        assert_eq!(renderer.mode(), DisplayMode::Lamp);
        assert_eq!(renderer.params().lamp_color, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_spark_probability_change_resets_grid() {
        let channel = IntentChannel::<4>::new();
        let mut config = config(DisplayMode::Torch);
        config.params.torch.spark_probability = 50;
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config);
        render_times(&mut renderer, 30);

        channel
            .sender()
            .try_send(ControlIntent::Params(parse_params("spark_prob=0")))
            .unwrap();
        renderer.render(Instant::from_millis(30));

        // One tick after the reset only the two bottom rows carry energy
        let grid = renderer.grid();
        for index in 2 * grid.per_level()..grid.len() {
            assert_eq!(grid.energy(index), 0, "index {index}");
        }
    }

    #[test]
    fn test_torch_top_shows_background() {
        let channel = IntentChannel::<4>::new();
        let mut config = config(DisplayMode::Torch);
        config.params.torch.background = Rgb::new(0, 80, 0);
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config);

        let frame = renderer.render(Instant::from_millis(0));

        assert_eq!(frame.get_color(LEDS - 1), Some(Rgb::new(0, 72, 0)));
    }

    #[cfg(feature = "ambient")]
    #[test]
    fn test_ambient_adds_to_background() {
        use embassy_time::Duration;
        use myrtio_message_torch::AmbientIntent;

        let channel = IntentChannel::<4>::new();
        let mut config = config(DisplayMode::Torch);
        config.params.torch.background = Rgb::new(0, 80, 0);
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config);
        channel
            .sender()
            .try_send(ControlIntent::Ambient(AmbientIntent {
                color: Rgb::new(0, 0, 255),
                intensity: 255,
                fade: Duration::from_millis(0),
            }))
            .unwrap();

        let frame = renderer.render(Instant::from_millis(0));

        assert_eq!(frame.get_color(LEDS - 1), Some(Rgb::new(0, 72, 248)));
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_remote_write_switches_mode() {
        use myrtio_message_torch::handle_vdsd;

        let channel = IntentChannel::<4>::new();
        let mut renderer = Renderer::<LEDS, 4>::new(channel.receiver(), &config(DisplayMode::Torch));

        let reply = handle_vdsd("state0=0x03FF0000", renderer.params());
        channel.sender().try_send(reply.intent.unwrap()).unwrap();
        renderer.render(Instant::from_millis(0));

        assert_eq!(renderer.mode(), DisplayMode::Lamp);
        assert_eq!(renderer.frame().get_color(0), Some(Rgb::new(248, 0, 0)));
    }
}
