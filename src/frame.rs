/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Simulated time at the end of this frame
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Infinite iterator of evenly spaced frames.
/// Replays are deterministic because no wall clock is involved.
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    frame_number: u64,
    delta: f32,
}

impl FixedStepFrames {
    pub fn new(delta: f32) -> Self {
        Self { frame_number: 0, delta }
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let number = self.frame_number;
        self.frame_number += 1;
        Some(FrameInfo::new(number, self.frame_number as f32 * self.delta, self.delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_evenly_spaced() {
        let frames: Vec<_> = FixedStepFrames::new(0.5).take(3).collect();
        assert_eq!(frames[0], FrameInfo::new(0, 0.5, 0.5));
        assert_eq!(frames[2], FrameInfo::new(2, 1.5, 0.5));
    }

    #[test]
    fn by_ref_resumes_numbering() {
        let mut frames = FixedStepFrames::new(0.1);
        assert_eq!(frames.by_ref().take(4).count(), 4);
        assert_eq!(frames.next().map(|f| f.number), Some(4));
        assert_eq!(frames.frame_number(), 5);
    }
}
