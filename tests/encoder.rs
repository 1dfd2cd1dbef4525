mod tests {
    use myrtio_message_torch::encoder::{
        SYMBOL_ONE, SYMBOL_ZERO, SYMBOLS_PER_PIXEL, Ws2812Encoder, encode_pixel,
    };
    use myrtio_message_torch::{GammaTable, PixelBuffer, Rgb, SymbolTransport};

    #[derive(Default)]
    struct RecordingTransport {
        symbols: Vec<u8>,
        writes: usize,
    }

    impl SymbolTransport for RecordingTransport {
        fn write_symbols(&mut self, symbols: &[u8]) {
            self.symbols.extend_from_slice(symbols);
            self.writes += 1;
        }
    }

    fn bits(symbols: &[u8]) -> u8 {
        symbols.iter().fold(0, |acc, symbol| {
            assert!(*symbol == SYMBOL_ONE || *symbol == SYMBOL_ZERO);
            (acc << 1) | u8::from(*symbol == SYMBOL_ONE)
        })
    }

    #[test]
    fn test_pixel_is_green_red_blue_msb_first() {
        let gamma = GammaTable::pwm();
        // 5-bit levels: red full, green off, blue lowest step
        let symbols = encode_pixel(Rgb::new(31, 0, 1), &gamma);
        assert_eq!(symbols.len(), SYMBOLS_PER_PIXEL);
        assert_eq!(bits(&symbols[0..8]), 0);
        assert_eq!(bits(&symbols[8..16]), 255);
        assert_eq!(bits(&symbols[16..24]), 1);
        assert_eq!(symbols[23], SYMBOL_ONE);
        assert_eq!(symbols[16], SYMBOL_ZERO);
    }

    #[test]
    fn test_duty_cycle_comes_from_gamma() {
        let gamma = GammaTable::pwm();
        let symbols = encode_pixel(Rgb::new(0, 20, 0), &gamma);
        assert_eq!(bits(&symbols[0..8]), gamma.get(20));
        assert_eq!(bits(&symbols[0..8]), 58);
    }

    #[test]
    fn test_show_writes_whole_buffer() {
        let mut buffer = PixelBuffer::<3>::new();
        buffer.set_color(2, Rgb::new(255, 255, 255));

        let mut encoder = Ws2812Encoder::new(RecordingTransport::default());
        encoder.show(&buffer);

        let transport = encoder.into_transport();
        assert_eq!(transport.writes, 3);
        assert_eq!(transport.symbols.len(), 3 * SYMBOLS_PER_PIXEL);
        assert!(transport.symbols[..48].iter().all(|s| *s == SYMBOL_ZERO));
        assert!(transport.symbols[48..].iter().all(|s| *s == SYMBOL_ONE));
    }
}
