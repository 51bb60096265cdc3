mod tests {
    use colorwave_composer::color::{Hsl, Rgb, hsl2rgb};
    use colorwave_composer::error::Error;
    use colorwave_composer::wave::{DEFAULT_SPEED_DIVISOR, Direction, WaveGenerator, WaveParams};

    #[test]
    fn test_first_position_at_tick_zero() {
        let wave = WaveGenerator::new(10, WaveParams::default()).unwrap();
        let mut leds = [Rgb::default(); 10];
        wave.render(0, &mut leds);

        let expected = hsl2rgb(Hsl::new(0.5, 1.0, 0.6));
        assert_eq!(leds[0], expected);
        assert_eq!(wave.sample(0, 0), expected);
    }

    #[test]
    fn test_default_params() {
        let params = WaveParams::default();
        assert_eq!(params.direction, Direction::Forward);
        assert_eq!(params.speed_divisor, DEFAULT_SPEED_DIVISOR);
        assert_eq!(DEFAULT_SPEED_DIVISOR, 300.0);
    }

    #[test]
    fn test_wave_travels_forward() {
        // with the divisor equal to the stride, one tick moves the wave by one position
        let wave = WaveGenerator::new(10, WaveParams::default().with_speed_divisor(10.0)).unwrap();
        for i in 0..10 {
            assert_eq!(wave.sample(0, i), wave.sample(i as u64, 0));
        }
    }

    #[test]
    fn test_wave_travels_backward() {
        let params = WaveParams::default()
            .with_speed_divisor(10.0)
            .with_direction(Direction::Backward);
        let wave = WaveGenerator::new(10, params).unwrap();
        for i in 0..10 {
            assert_eq!(wave.sample(i as u64, i), wave.sample(0, 0));
        }
    }

    #[test]
    fn test_render_is_pure() {
        let wave = WaveGenerator::new(8, WaveParams::default()).unwrap();
        let mut first = [Rgb::default(); 8];
        let mut second = [Rgb::default(); 8];
        wave.render(1234, &mut first);
        wave.render(1234, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_writes_one_stride() {
        let wave = WaveGenerator::new(4, WaveParams::default()).unwrap();
        let marker = Rgb::new(1, 2, 3);
        let mut leds = [marker; 6];
        wave.render(0, &mut leds);
        assert_eq!(leds[4], marker);
        assert_eq!(leds[5], marker);
        assert_eq!(leds[3], wave.sample(0, 3));
    }

    #[test]
    fn test_flip_direction() {
        let mut wave = WaveGenerator::new(10, WaveParams::default()).unwrap();
        wave.flip();
        assert_eq!(wave.direction(), Direction::Backward);
        wave.flip();
        assert_eq!(wave.direction(), Direction::Forward);
        wave.set_direction(Direction::Backward);
        assert_eq!(wave.params().direction, Direction::Backward);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            WaveGenerator::new(0, WaveParams::default()),
            Err(Error::InvalidParameter(_))
        ));
        for divisor in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                WaveGenerator::new(10, WaveParams::default().with_speed_divisor(divisor)),
                Err(Error::InvalidParameter(_))
            ));
        }

        let mut wave = WaveGenerator::new(10, WaveParams::default()).unwrap();
        assert!(wave.set_speed_divisor(0.0).is_err());
        assert_eq!(wave.params().speed_divisor, DEFAULT_SPEED_DIVISOR);
        wave.set_speed_divisor(150.0).unwrap();
        assert_eq!(wave.params().speed_divisor, 150.0);
    }
}
