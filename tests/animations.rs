mod tests {
    use strip_animator::animation::{
        Animation, BEAT_COOLDOWN, BeatDropAnimation, CenterWaveAnimation, CylonAnimation,
        FrameContext, MAX_RIPPLES, MatrixAnimation, RainbowAnimation, RgbChaserAnimation,
        RipplePool, SPAWN_COOLDOWN, SoundRippleAnimation, WaveVariant,
    };
    use strip_animator::color::{BLACK, BLUE, GREEN, RED, hsv};
    use strip_animator::rng::SimpleRng;
    use strip_animator::{BandVector, Instant, PixelBuffer, Rgb, Topology};

    const SILENCE: BandVector = [0; 7];

    fn setup(strips: i32, per_strip: i32) -> (Topology, PixelBuffer<256>) {
        let topology = Topology::new(strips, per_strip).unwrap();
        (topology, PixelBuffer::new(topology).unwrap())
    }

    fn render<A: Animation>(
        animation: &mut A,
        topology: Topology,
        intensities: &[u8],
        bands: &BandVector,
        now_ms: u64,
        leds: &mut PixelBuffer<256>,
    ) {
        let ctx = FrameContext {
            topology,
            intensities,
            bands,
            now: Instant::from_millis(now_ms),
        };
        animation.advance(&ctx, leds).unwrap();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn rainbow_pixel(index: usize, total: usize, hue: u8) -> Rgb {
        hsv(((index * 256 / total) as u8).wrapping_add(hue), 255, 255)
    }

    #[test]
    fn test_rainbow_spreads_hue_over_buffer() {
        let (topology, mut leds) = setup(3, 5);
        let mut rainbow = RainbowAnimation::default();
        render(&mut rainbow, topology, &[0; 3], &SILENCE, 0, &mut leds);
        for index in 0..15 {
            assert_eq!(leds.get(index).unwrap(), rainbow_pixel(index, 15, 0));
        }
        assert_eq!(leds.get(0).unwrap(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_rainbow_rotates_one_step_per_frame() {
        let (topology, mut leds) = setup(2, 4);
        let mut rainbow = RainbowAnimation::default();
        for frame in 0..300_u64 {
            render(&mut rainbow, topology, &[0; 2], &SILENCE, frame, &mut leds);
            let hue = (frame % 256) as u8;
            for index in 0..8 {
                assert_eq!(leds.get(index).unwrap(), rainbow_pixel(index, 8, hue));
            }
        }
    }

    #[test]
    fn test_cylon_bounces_between_strip_ends() {
        let (topology, mut leds) = setup(1, 4);
        let mut cylon = CylonAnimation::default();
        let mut cursors = Vec::new();
        for frame in 0..8 {
            cursors.push(cylon.cursor());
            render(&mut cylon, topology, &[0], &SILENCE, frame, &mut leds);
        }
        assert_eq!(cursors, [0, 1, 2, 3, 2, 1, 0, 1]);
    }

    #[test]
    fn test_cylon_mirrors_odd_strips() {
        let (topology, mut leds) = setup(2, 4);
        let mut cylon = CylonAnimation::default();
        render(&mut cylon, topology, &[0, 0], &SILENCE, 0, &mut leds);
        assert_eq!(leds.get(0).unwrap(), Rgb::new(220, 0, 0));
        assert_eq!(leds.get(7).unwrap(), Rgb::new(220, 0, 0));
        assert_eq!(leds.get(4).unwrap(), BLACK);
    }

    #[test]
    fn test_chaser_switches_color_each_lap() {
        let (topology, mut leds) = setup(1, 3);
        let mut chaser = RgbChaserAnimation::default();
        assert_eq!(chaser.color(), RED);
        for frame in 0..3 {
            render(&mut chaser, topology, &[0], &SILENCE, frame, &mut leds);
        }
        assert!(leds.as_slice().iter().all(|c| *c == RED));
        assert_eq!(chaser.color(), GREEN);

        render(&mut chaser, topology, &[0], &SILENCE, 3, &mut leds);
        assert_eq!(leds.get(0).unwrap(), GREEN);
        assert_eq!(leds.get(1).unwrap(), RED);
        for frame in 4..6 {
            render(&mut chaser, topology, &[0], &SILENCE, frame, &mut leds);
        }
        assert_eq!(chaser.color(), BLUE);
    }

    #[test]
    fn test_beat_drop_flash_and_cooldown() {
        let (topology, mut leds) = setup(2, 5);
        let mut drop = BeatDropAnimation::default();
        let bass: BandVector = [255, 255, 255, 0, 0, 0, 0];

        render(&mut drop, topology, &[0, 0], &bass, 1_000, &mut leds);
        assert!(leds.as_slice().iter().all(|c| *c == Rgb::new(255, 255, 255)));
        assert_eq!(drop.flash(), 245);

        // still inside the cooldown: the flash only decays
        render(&mut drop, topology, &[0, 0], &bass, 1_050, &mut leds);
        assert_eq!(leds.get(0).unwrap(), Rgb::new(245, 245, 245));
        assert_eq!(drop.flash(), 235);

        let cooled = 1_000 + BEAT_COOLDOWN.as_millis();
        render(&mut drop, topology, &[0, 0], &bass, cooled, &mut leds);
        assert_eq!(drop.flash(), 245);
    }

    #[test]
    fn test_beat_drop_ignores_quiet_bass() {
        let (topology, mut leds) = setup(1, 5);
        let mut drop = BeatDropAnimation::default();
        let bands: BandVector = [200, 200, 200, 255, 255, 255, 255];
        render(&mut drop, topology, &[0], &bands, 1_000, &mut leds);
        assert_eq!(drop.flash(), 0);
        assert!(leds.as_slice().iter().all(|c| *c == BLACK));
    }

    #[test]
    fn test_beat_drop_glows_loud_strips_between_flashes() {
        let (topology, mut leds) = setup(3, 5);
        let mut drop = BeatDropAnimation::default();
        render(&mut drop, topology, &[255, 40, 255], &SILENCE, 1_000, &mut leds);
        assert_eq!(leds.get(2).unwrap(), Rgb::new(150, 0, 75));
        assert_eq!(leds.get(7).unwrap(), BLACK);
        assert_eq!(leds.get(12).unwrap(), Rgb::new(75, 150, 0));
    }

    #[test]
    fn test_wave_colors() {
        assert_eq!(WaveVariant::Ice.color(0), Rgb::new(100, 0, 255));
        assert_eq!(WaveVariant::Ice.color(255), Rgb::new(0, 255, 255));
        assert_eq!(WaveVariant::PurpleRain.color(255), Rgb::new(255, 0, 255));
        assert_eq!(WaveVariant::Fire.color(0), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_waves_travel_outwards() {
        let (topology, mut leds) = setup(1, 7);
        let mut fire = CenterWaveAnimation::new(WaveVariant::Fire);
        render(&mut fire, topology, &[255], &SILENCE, 0, &mut leds);
        assert_eq!(leds.get(3).unwrap(), Rgb::new(255, 255, 0));
        render(&mut fire, topology, &[0], &SILENCE, 20, &mut leds);
        assert_eq!(leds.get(3).unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(leds.get(2).unwrap(), Rgb::new(248, 240, 0));
        assert_eq!(leds.get(4).unwrap(), Rgb::new(248, 240, 0));
    }

    #[test]
    fn test_matrix_spawns_only_on_loud_strips() {
        let (topology, mut leds) = setup(2, 10);
        let mut matrix = MatrixAnimation::new(SimpleRng::new(7));
        render(&mut matrix, topology, &[255, 0], &SILENCE, 0, &mut leds);

        let lit = |range: core::ops::Range<usize>, leds: &PixelBuffer<256>| {
            range.filter(|i| leds.get(*i).unwrap() != BLACK).count()
        };
        assert_eq!(lit(0..10, &leds), 1);
        assert_eq!(lit(10..20, &leds), 0);

        // the drop cascades into strip 1 on the next frame
        render(&mut matrix, topology, &[0, 0], &SILENCE, 50, &mut leds);
        assert_eq!(lit(10..20, &leds), 1);
    }

    #[test]
    fn test_ripple_pool_never_exceeds_capacity() {
        let mut pool = RipplePool::default();
        for _ in 0..=MAX_RIPPLES {
            pool.spawn(RED);
        }
        assert_eq!(pool.active_count(), MAX_RIPPLES);
        assert_eq!(pool.next_slot(), 1);
    }

    #[test]
    fn test_sound_ripple_spawns_once_per_cooldown() {
        let (topology, mut leds) = setup(4, 9);
        let mut ripples = SoundRippleAnimation::default();
        let loud = [255, 255, 255, 255];
        render(&mut ripples, topology, &loud, &SILENCE, 1_000, &mut leds);
        assert_eq!(ripples.pool().active_count(), 1);
        render(&mut ripples, topology, &loud, &SILENCE, 1_015, &mut leds);
        assert_eq!(ripples.pool().active_count(), 1);
        let cooled = 1_000 + SPAWN_COOLDOWN.as_millis();
        render(&mut ripples, topology, &loud, &SILENCE, cooled, &mut leds);
        assert_eq!(ripples.pool().active_count(), 2);
    }

    #[test]
    fn test_sound_ripple_stamps_center_then_expands() {
        // single strip: hue 0, full value, so the ripple is pure red
        let (topology, mut leds) = setup(1, 9);
        let mut ripples = SoundRippleAnimation::default();
        render(&mut ripples, topology, &[255], &SILENCE, 1_000, &mut leds);
        assert_eq!(leds.get(4).unwrap(), RED);
        assert_eq!(leds.get(3).unwrap(), BLACK);
        assert_eq!(leds.get(5).unwrap(), BLACK);

        // one LED outwards per frame, dimmer with distance and age
        render(&mut ripples, topology, &[0], &SILENCE, 1_015, &mut leds);
        assert_eq!(leds.get(4).unwrap(), Rgb::new(230, 0, 0));
        assert_eq!(leds.get(3).unwrap(), Rgb::new(247, 0, 0));
        assert_eq!(leds.get(5).unwrap(), Rgb::new(247, 0, 0));
        assert_eq!(leds.get(2).unwrap(), BLACK);

        render(&mut ripples, topology, &[0], &SILENCE, 1_030, &mut leds);
        assert_eq!(leds.get(3).unwrap(), Rgb::new(222, 0, 0));
        assert_eq!(leds.get(2).unwrap(), Rgb::new(179, 0, 0));
        assert_eq!(leds.get(6).unwrap(), Rgb::new(179, 0, 0));

        render(&mut ripples, topology, &[0], &SILENCE, 1_045, &mut leds);
        assert_eq!(leds.get(1).unwrap(), Rgb::new(115, 0, 0));
        assert_eq!(leds.get(7).unwrap(), Rgb::new(115, 0, 0));

        render(&mut ripples, topology, &[0], &SILENCE, 1_060, &mut leds);
        assert_eq!(leds.get(0).unwrap(), Rgb::new(55, 0, 0));
        assert_eq!(leds.get(8).unwrap(), Rgb::new(55, 0, 0));
    }

    #[test]
    fn test_sound_ripple_adds_onto_fading_trail() {
        let (topology, mut leds) = setup(1, 9);
        let mut ripples = SoundRippleAnimation::default();
        leds.set(4, Rgb::new(100, 200, 0)).unwrap();
        render(&mut ripples, topology, &[255], &SILENCE, 1_000, &mut leds);
        // faded to (75, 175, 0), then red added without wrapping
        assert_eq!(leds.get(4).unwrap(), Rgb::new(255, 175, 0));

        let cooled = 1_000 + SPAWN_COOLDOWN.as_millis();
        render(&mut ripples, topology, &[255], &SILENCE, cooled, &mut leds);
        assert_eq!(ripples.pool().active_count(), 2);
        assert_eq!(leds.get(4).unwrap(), Rgb::new(255, 150, 0));
    }

    #[test]
    fn test_sound_ripple_clips_at_even_strip_edge() {
        let (topology, mut leds) = setup(2, 8);
        let mut ripples = SoundRippleAnimation::default();
        render(&mut ripples, topology, &[255, 0], &SILENCE, 1_000, &mut leds);
        assert_eq!(leds.get(4).unwrap(), RED);
        assert_eq!(leds.get(12).unwrap(), RED);

        for frame in 1..=4 {
            render(&mut ripples, topology, &[0, 0], &SILENCE, 1_000 + frame * 15, &mut leds);
        }
        // radius 4 reaches index 0 on strip 0, its mirror at 8 belongs to
        // strip 1 and only receives strip 1's ring
        assert_eq!(leds.get(0).unwrap(), Rgb::new(55, 0, 0));
        assert_eq!(leds.get(8).unwrap(), Rgb::new(55, 0, 0));
        assert_eq!(leds.get(15).unwrap(), Rgb::new(90, 0, 0));
    }

    #[test]
    fn test_sound_ripple_retires_through_advance() {
        let (topology, mut leds) = setup(1, 9);
        let mut ripples = SoundRippleAnimation::default();
        render(&mut ripples, topology, &[255], &SILENCE, 1_000, &mut leds);
        for frame in 1..9 {
            render(&mut ripples, topology, &[0], &SILENCE, 1_000 + frame * 15, &mut leds);
            assert_eq!(ripples.pool().active_count(), 1);
        }
        // the ring left the strip half plus slack
        render(&mut ripples, topology, &[0], &SILENCE, 1_200, &mut leds);
        assert_eq!(ripples.pool().active_count(), 0);

        for frame in 0..12 {
            render(&mut ripples, topology, &[0], &SILENCE, 1_300 + frame * 15, &mut leds);
        }
        assert!(leds.as_slice().iter().all(|c| *c == BLACK));
    }

    #[test]
    fn test_sound_ripple_stays_silent_below_threshold() {
        let (topology, mut leds) = setup(2, 9);
        let mut ripples = SoundRippleAnimation::default();
        render(&mut ripples, topology, &[120, 100], &SILENCE, 1_000, &mut leds);
        assert_eq!(ripples.pool().active_count(), 0);
        assert!(leds.as_slice().iter().all(|c| *c == BLACK));
    }
}
