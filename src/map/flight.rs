// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Smooth fly-to animation between two map views.

use std::time::Duration;

use goldfish_core::LatLng;

/// One frame of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightFrame {
    pub center: LatLng,
    pub zoom: f64,
    pub finished: bool,
}

/// An in-progress pan/zoom animation.
///
/// The clock starts on the first [`Flight::step`], so a flight requested
/// between frames begins when it is first drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    from: LatLng,
    from_zoom: f64,
    to: LatLng,
    to_zoom: f64,
    duration: Duration,
    started_at: Option<f64>,
}

impl Flight {
    pub fn new(from: LatLng, from_zoom: f64, to: LatLng, to_zoom: f64, duration: Duration) -> Self {
        Self {
            from,
            from_zoom,
            to,
            to_zoom,
            duration,
            started_at: None,
        }
    }

    pub fn target(&self) -> (LatLng, f64) {
        (self.to, self.to_zoom)
    }

    /// Advance to `now` (seconds on the UI clock).
    pub fn step(&mut self, now: f64) -> FlightFrame {
        let started_at = *self.started_at.get_or_insert(now);
        let total = self.duration.as_secs_f64();
        let t = if total <= 0.0 {
            1.0
        } else {
            ((now - started_at) / total).clamp(0.0, 1.0)
        };

        let (center, zoom) = self.sample(t);
        FlightFrame {
            center,
            zoom,
            finished: t >= 1.0,
        }
    }

    /// View at normalized time `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> (LatLng, f64) {
        let e = ease_in_out(t.clamp(0.0, 1.0));
        let center = LatLng::new(
            lerp(self.from.lat, self.to.lat, e),
            lerp(self.from.lng, self.to.lng, e),
        );
        (center, lerp(self.from_zoom, self.to_zoom, e))
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Cubic ease-in-out
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> Flight {
        Flight::new(
            LatLng::new(36.0, 138.0),
            5.0,
            LatLng::new(35.0, 139.0),
            14.0,
            Duration::from_millis(1500),
        )
    }

    #[test]
    fn test_endpoints() {
        let f = flight();
        assert_eq!(f.sample(0.0), (LatLng::new(36.0, 138.0), 5.0));
        assert_eq!(f.sample(1.0), (LatLng::new(35.0, 139.0), 14.0));
    }

    #[test]
    fn test_midpoint_is_halfway() {
        let (center, zoom) = flight().sample(0.5);
        assert!((center.lat - 35.5).abs() < 1e-9);
        assert!((center.lng - 138.5).abs() < 1e-9);
        assert!((zoom - 9.5).abs() < 1e-9);
    }

    #[test]
    fn test_step_uses_first_frame_as_start() {
        let mut f = flight();
        let first = f.step(100.0);
        assert!(!first.finished);
        assert_eq!(first.center, LatLng::new(36.0, 138.0));

        let mid = f.step(100.75);
        assert!(!mid.finished);
        assert!(mid.zoom > 5.0 && mid.zoom < 14.0);

        let end = f.step(101.6);
        assert!(end.finished);
        assert_eq!((end.center, end.zoom), f.target());
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut f = Flight::new(LatLng::new(0.0, 0.0), 3.0, LatLng::new(1.0, 1.0), 4.0, Duration::ZERO);
        let frame = f.step(5.0);
        assert!(frame.finished);
        assert_eq!(frame.center, LatLng::new(1.0, 1.0));
    }
}
