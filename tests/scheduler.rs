mod tests {
    use embassy_time::{Duration, Instant};
    use strip_animator::AnimationId;
    use strip_animator::scheduler::{
        AnimationScheduler, DEFAULT_INTERVAL, interval, interval_for_raw, should_advance,
    };

    #[test]
    fn test_intervals() {
        let expected = [
            (AnimationId::Cylon, 30),
            (AnimationId::Rainbow, 10),
            (AnimationId::RgbChaser, 30),
            (AnimationId::BeatSine, 50),
            (AnimationId::IceWaves, 20),
            (AnimationId::PurpleRain, 20),
            (AnimationId::Fire, 20),
            (AnimationId::Matrix, 50),
            (AnimationId::Vu, 5),
            (AnimationId::BeatDrop, 10),
            (AnimationId::SoundRipple, 15),
        ];
        for (id, ms) in expected {
            assert_eq!(interval(id), Duration::from_millis(ms));
        }
        assert_eq!(interval_for_raw(42), DEFAULT_INTERVAL);
        assert_eq!(DEFAULT_INTERVAL, Duration::from_millis(100));
    }

    #[test]
    fn test_fires_on_the_boundary() {
        let last = Instant::from_millis(1_000);
        assert!(!should_advance(Instant::from_millis(1_009), last, AnimationId::Rainbow));
        assert!(should_advance(Instant::from_millis(1_010), last, AnimationId::Rainbow));
    }

    #[test]
    fn test_never_fires_for_clock_going_backwards() {
        let last = Instant::from_millis(1_000);
        assert!(!should_advance(Instant::from_millis(500), last, AnimationId::Vu));
    }

    #[test]
    fn test_one_frame_per_interval() {
        let mut scheduler = AnimationScheduler::new();
        let mut fired = 0;
        for step in 1..=100 {
            let now = Instant::from_millis(step);
            if scheduler.poll(now, AnimationId::Rainbow) {
                assert_eq!(step % 10, 0);
                fired += 1;
            }
            if step % 10 == 0 {
                assert_eq!(fired, step / 10);
            }
        }
        assert_eq!(fired, 10);
    }

    #[test]
    fn test_late_poll_does_not_catch_up() {
        let mut scheduler = AnimationScheduler::new();
        assert!(scheduler.poll(Instant::from_millis(95), AnimationId::Rainbow));
        assert_eq!(scheduler.last_tick(), Instant::from_millis(95));
        assert!(!scheduler.poll(Instant::from_millis(100), AnimationId::Rainbow));
        assert!(scheduler.poll(Instant::from_millis(105), AnimationId::Rainbow));
    }

    #[test]
    fn test_unknown_raw_id_uses_default_interval() {
        let mut scheduler = AnimationScheduler::new();
        assert!(!scheduler.poll_raw(Instant::from_millis(99), 200));
        assert!(scheduler.poll_raw(Instant::from_millis(100), 200));
    }
}
