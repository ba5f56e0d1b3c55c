use std::f32::consts::TAU;

/// Where splatters get their randomness.
///
/// Implemented for `fastrand::Rng`; tests substitute a scripted source to make splatter
/// placement deterministic.
pub trait RandomSource {
	/// A sample uniform in `[0, 1)`.
	fn next_unit(&mut self) -> f32;

	/// A sample uniform in `[low, high)`.
	fn uniform(&mut self, low: f32, high: f32) -> f32 {
		low + (high - low) * self.next_unit()
	}

	/// An angle uniform in `[0, 2π)`.
	fn angle(&mut self) -> f32 {
		self.uniform(0.0, TAU)
	}

	/// An integer uniform in `1..=max`, or `0` when `max` is `0`.
	fn count(&mut self, max: u32) -> u32 {
		if max == 0 {
			return 0;
		}
		((self.next_unit() * max as f32) as u32).min(max - 1) + 1
	}
}

impl RandomSource for fastrand::Rng {
	fn next_unit(&mut self) -> f32 {
		self.f32()
	}
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
	fn next_unit(&mut self) -> f32 {
		(**self).next_unit()
	}
}
