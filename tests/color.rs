mod tests {
    use strip_animator::Rgb;
    use strip_animator::color::{RED, WHITE, add_scaled, hsv, scale_color};

    #[test]
    fn test_hsv_primary_hues() {
        assert_eq!(hsv(0, 255, 255), Rgb::new(255, 0, 0));
        assert_eq!(hsv(0, 0, 0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 255), WHITE);
        assert_eq!(scale_color(WHITE, 0), Rgb::new(0, 0, 0));
        assert_eq!(scale_color(Rgb::new(200, 100, 0), 127), Rgb::new(100, 50, 0));
    }

    #[test]
    fn test_add_scaled_saturates() {
        let base = Rgb::new(200, 10, 0);
        assert_eq!(add_scaled(base, RED, 255), Rgb::new(255, 10, 0));
        assert_eq!(add_scaled(base, WHITE, 127), Rgb::new(255, 137, 127));
    }
}
