use rodio::{OutputStream, OutputStreamHandle, Sink};
use std::fmt;
use std::time::Duration;

/// Audio cue playback.
///
/// Wraps a rodio output stream; every cue is a short synthesized tone played
/// on a detached fire-and-forget sink.  Audio is strictly best-effort: if no
/// output device is available there is no `Audio` at all, and sink failures
/// at play time are swallowed.  The simulation never sees any of it.
pub(crate) struct Audio {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Audio {
    /// Open the default output device, or `None` if there isn't a usable one
    pub(crate) fn new() -> Option<Audio> {
        let (stream, handle) = OutputStream::try_default().ok()?;
        Some(Audio {
            _stream: stream,
            handle,
        })
    }

    /// Short low blip marking one movement tick
    pub(crate) fn play_move_cue(&self) {
        self.play(Chirp::new(220.0, 160.0, Duration::from_millis(30), 0.04));
    }

    /// Brighter rising chirp for eating food
    pub(crate) fn play_eat_cue(&self) {
        self.play(Chirp::new(520.0, 780.0, Duration::from_millis(120), 0.12));
    }

    fn play(&self, chirp: Chirp) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            sink.append(chirp);
            sink.detach();
        }
    }
}

impl fmt::Debug for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Audio").finish_non_exhaustive()
    }
}

/// A mono oscillator sweeping linearly between two pitches under a decaying
/// envelope
#[derive(Clone, Debug)]
struct Chirp {
    from_hz: f32,
    to_hz: f32,
    amplitude: f32,
    phase: f32,
    frame: u32,
    total_frames: u32,
}

impl Chirp {
    const SAMPLE_RATE: u32 = 44_100;

    fn new(from_hz: f32, to_hz: f32, duration: Duration, amplitude: f32) -> Chirp {
        Chirp {
            from_hz,
            to_hz,
            amplitude,
            phase: 0.0,
            frame: 0,
            total_frames: (duration.as_secs_f32() * Self::SAMPLE_RATE as f32) as u32,
        }
    }
}

impl Iterator for Chirp {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.frame >= self.total_frames {
            return None;
        }
        let progress = self.frame as f32 / self.total_frames as f32;
        let freq = self.from_hz + (self.to_hz - self.from_hz) * progress;
        self.phase += std::f32::consts::TAU * freq / Self::SAMPLE_RATE as f32;
        let envelope = (1.0 - progress) * (1.0 - progress);
        self.frame += 1;
        Some(self.phase.sin() * envelope * self.amplitude)
    }
}

impl rodio::Source for Chirp {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.total_frames.saturating_sub(self.frame) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        Self::SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f32(
            self.total_frames as f32 / Self::SAMPLE_RATE as f32,
        ))
    }
}
