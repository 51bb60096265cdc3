mod tests {
    use colorwave_composer::animation::{AnimationConfig, AnimationDriver};
    use colorwave_composer::color::Rgb;
    use colorwave_composer::display::{DisplayDevice, LedStrip, MemoryDisplay};
    use colorwave_composer::error::FrameError;
    use smart_leds::SmartLedsWrite;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum WriteError {
        Busy,
    }

    /// Writer that remembers the last frame it was given
    #[derive(Default)]
    struct RecordingWriter {
        written: Vec<Rgb>,
        writes: usize,
        fail: bool,
    }

    impl SmartLedsWrite for RecordingWriter {
        type Error = WriteError;
        type Color = Rgb;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), WriteError>
        where
            T: IntoIterator<Item = I>,
            I: Into<Rgb>,
        {
            if self.fail {
                return Err(WriteError::Busy);
            }
            self.written = iterator.into_iter().map(Into::into).collect();
            self.writes += 1;
            Ok(())
        }
    }

    #[test]
    fn test_unset_positions_written_black() {
        let mut strip = LedStrip::<_, 4>::new(RecordingWriter::default());
        assert_eq!(strip.size(), 4);

        strip.buffer_mut()[1] = Some(RED);
        strip.buffer_mut()[3] = Some(GREEN);
        strip.send().unwrap();

        let writer = strip.into_inner();
        assert_eq!(writer.writes, 1);
        assert_eq!(writer.written, vec![BLACK, RED, BLACK, GREEN]);
    }

    #[test]
    fn test_clear_unsets_every_position() {
        let mut strip = LedStrip::<_, 3>::new(RecordingWriter::default());
        strip.buffer_mut().fill(Some(RED));
        strip.clear();
        assert!(strip.buffer_mut().iter().all(Option::is_none));

        strip.send().unwrap();
        assert_eq!(strip.into_inner().written, vec![BLACK; 3]);
    }

    #[test]
    fn test_writer_error_returned_unchanged() {
        let mut strip = LedStrip::<_, 3>::new(RecordingWriter {
            fail: true,
            ..RecordingWriter::default()
        });
        assert_eq!(strip.send(), Err(WriteError::Busy));

        let mut driver = AnimationDriver::<3>::new(3, &AnimationConfig::default()).unwrap();
        let result = driver.render_frame(&mut strip);
        assert!(matches!(result, Err(FrameError::Display(WriteError::Busy))));
        assert_eq!(driver.tick(), 1);
        assert_eq!(strip.into_inner().writes, 0);
    }

    #[test]
    fn test_strip_matches_memory_display() {
        let config = AnimationConfig::default();
        let mut strip = LedStrip::<_, 6>::new(RecordingWriter::default());
        let mut memory = MemoryDisplay::<6>::new();

        let mut on_strip = AnimationDriver::<6>::new(6, &config).unwrap();
        let mut in_memory = AnimationDriver::<6>::new(6, &config).unwrap();
        for _ in 0..5 {
            on_strip.render_frame(&mut strip).unwrap();
            in_memory.render_frame(&mut memory).unwrap();
        }

        let writer = strip.into_inner();
        assert_eq!(writer.writes, 5);
        assert_eq!(writer.written, memory.shown().to_vec());
    }

    #[test]
    fn test_memory_display_counts_frames() {
        let mut display = MemoryDisplay::<2>::default();
        display.buffer_mut()[0] = Some(GREEN);
        display.send().unwrap();
        assert_eq!(display.shown(), &[GREEN, BLACK]);
        assert_eq!(display.frames(), 1);

        display.clear();
        display.send().unwrap();
        assert_eq!(display.shown(), &[BLACK, BLACK]);
        assert_eq!(display.frames(), 2);
    }
}
