//! Cat-recognition service for HomeSentry
//!
//! Defines the `ImageService` collaborator contract consumed by the security
//! engine, plus `FakeImageService`, a coin-flip stand-in for development and
//! demos. A real recognition backend (cloud vision, local model) implements
//! the same trait; none ships in this workspace.

use hs_core::CameraFrame;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Visual-recognition collaborator reporting cat presence.
///
/// Synchronous and infallible from the engine's point of view; a backend that
/// cannot answer must decide on a verdict itself.
pub trait ImageService: Send + Sync {
    /// Whether the frame contains a cat, at the given confidence threshold
    /// (percentage, 0.0 to 100.0).
    fn image_contains_cat(&self, frame: &CameraFrame, confidence_threshold: f32) -> bool;
}

/// Development stand-in that ignores the frame and flips a coin.
pub struct FakeImageService {
    rng: Mutex<StdRng>,
}

impl FakeImageService {
    /// Fake seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Fake with a fixed seed, for reproducible sequences
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for FakeImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageService for FakeImageService {
    fn image_contains_cat(&self, frame: &CameraFrame, confidence_threshold: f32) -> bool {
        let verdict = self.rng.lock().gen_bool(0.5);
        debug!(
            width = frame.width,
            height = frame.height,
            threshold = confidence_threshold,
            verdict,
            "Fake detector answered"
        );
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_fake_is_reproducible() {
        let frame = CameraFrame::blank(64, 64);
        let a = FakeImageService::with_seed(7);
        let b = FakeImageService::with_seed(7);

        for _ in 0..32 {
            assert_eq!(
                a.image_contains_cat(&frame, 50.0),
                b.image_contains_cat(&frame, 50.0)
            );
        }
    }

    #[test]
    fn fake_answers_both_ways_eventually() {
        let frame = CameraFrame::blank(64, 64);
        let fake = FakeImageService::with_seed(42);

        let verdicts: Vec<bool> = (0..64)
            .map(|_| fake.image_contains_cat(&frame, 50.0))
            .collect();
        assert!(verdicts.iter().any(|&v| v));
        assert!(verdicts.iter().any(|&v| !v));
    }
}
