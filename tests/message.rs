mod tests {
    use myrtio_message_torch::Message;
    use myrtio_message_torch::message::MAX_MESSAGE_LEN;

    #[test]
    fn test_plain_text() {
        assert_eq!(Message::decode(b"Hello").code_points(), b"Hello");
    }

    #[test]
    fn test_percent_escapes() {
        assert_eq!(Message::decode(b"Hi%21%20you").code_points(), b"Hi! you");
        assert_eq!(Message::decode(b"%4a%4B").code_points(), b"JK");
    }

    #[test]
    fn test_truncated_escape_ends_message() {
        assert_eq!(Message::decode(b"ab%4").code_points(), b"ab");
        assert_eq!(Message::decode(b"ab%").code_points(), b"ab");
    }

    #[test]
    fn test_malformed_escape_ends_message() {
        assert_eq!(Message::decode(b"ab%G1cd").code_points(), b"ab");
        assert_eq!(Message::decode(b"ab%1Gcd").code_points(), b"ab");
        assert_eq!(Message::decode(b"%zz").code_points(), b"");
    }

    #[test]
    fn test_escaped_nul_is_kept() {
        assert_eq!(Message::decode(b"a%00b").code_points(), b"a\0b");
    }

    #[test]
    fn test_umlauts() {
        let message = Message::decode("ÄÖÜäöü".as_bytes());
        assert_eq!(message.code_points(), &[0x80, 0x81, 0x82, 0x83, 0x84, 0x85]);
    }

    #[test]
    fn test_unknown_latin1_is_block() {
        let message = Message::decode("café".as_bytes());
        assert_eq!(message.code_points(), &[b'c', b'a', b'f', 0x7F]);
    }

    #[test]
    fn test_truncated_latin1_ends_message() {
        assert_eq!(Message::decode(b"ab\xC3").code_points(), b"ab");
    }

    #[test]
    fn test_long_message_is_truncated() {
        let raw = [b'a'; 200];
        assert_eq!(Message::decode(&raw).len(), MAX_MESSAGE_LEN);
        assert_eq!(Message::from_code_points(&raw).len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn test_empty() {
        assert!(Message::decode(b"").is_empty());
        assert!(Message::new().is_empty());
    }
}
