//! Movement analysis of stored sessions.
//!
//! Walks a session's actions without replaying them and collects the pointer
//! track: polylines of consecutive moves, click marks and the area the
//! session covered.

use crate::replay::{EventSimulator, SimulatedInput};
use activity_format::{MouseButton, Point, Session};

/// A button press or release seen in the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickMark {
    pub position: Point,
    pub button: MouseButton,
    /// `true` for a press, `false` for a release.
    pub pressed: bool,
}

/// Pointer track extracted from a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MovementTrack {
    /// Surface size when capture started.
    pub starting_size: (f64, f64),
    /// Largest width and height the surface reached.
    pub extent: (f64, f64),
    /// Polylines of consecutive pointer moves, each with at least two points.
    pub paths: Vec<Vec<Point>>,
    pub clicks: Vec<ClickMark>,
}

impl MovementTrack {
    /// Analyze serialized session text. Blank text yields `None`.
    pub fn from_session_text(text: &str) -> Option<Self> {
        Session::deserialize(text)
            .ok()
            .map(|session| Self::from_session(&session))
    }

    pub fn from_session(session: &Session) -> Self {
        let starting_size = (session.starting_width, session.starting_height);
        let mut track = Self {
            starting_size,
            extent: starting_size,
            ..Default::default()
        };
        let mut current = Vec::new();

        for action in session.decode_actions() {
            let Ok(input) = EventSimulator::interpret(&action) else {
                continue;
            };
            match input {
                SimulatedInput::MouseMove { position } => current.push(position),
                SimulatedInput::MouseDown { position, button } => {
                    track.end_path(&mut current);
                    track.clicks.push(ClickMark {
                        position,
                        button,
                        pressed: true,
                    });
                }
                SimulatedInput::MouseUp { position, button } => {
                    track.end_path(&mut current);
                    track.clicks.push(ClickMark {
                        position,
                        button,
                        pressed: false,
                    });
                }
                SimulatedInput::Resize { width, height } => {
                    track.extent.0 = track.extent.0.max(width);
                    track.extent.1 = track.extent.1.max(height);
                }
                _ => {}
            }
        }
        track.end_path(&mut current);
        track
    }

    /// Number of line segments across all paths.
    pub fn segment_count(&self) -> usize {
        self.paths.iter().map(|path| path.len().saturating_sub(1)).sum()
    }

    /// Total distance travelled along all paths.
    pub fn path_length(&self) -> f64 {
        self.paths
            .iter()
            .flat_map(|path| path.windows(2))
            .map(|pair| (pair[1].x - pair[0].x).hypot(pair[1].y - pair[0].y))
            .sum()
    }

    /// Number of button presses.
    pub fn press_count(&self) -> usize {
        self.clicks.iter().filter(|click| click.pressed).count()
    }

    fn end_path(&mut self, current: &mut Vec<Point>) {
        if current.len() >= 2 {
            self.paths.push(std::mem::take(current));
        } else {
            current.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text() {
        assert_eq!(MovementTrack::from_session_text("  "), None);
    }

    #[test]
    fn test_paths_split_by_clicks() {
        let track = MovementTrack::from_session_text(
            "f30;w100;h80;c;am0,0m3,4m6,8p6,8,0m9,9r9,9,0m1,1m1,2",
        )
        .unwrap();

        assert_eq!(track.starting_size, (100.0, 80.0));
        assert_eq!(track.paths.len(), 2);
        assert_eq!(track.paths[0].len(), 3);
        assert_eq!(track.segment_count(), 3);
        assert_eq!(track.path_length(), 11.0);
        assert_eq!(track.press_count(), 1);
        assert_eq!(
            track.clicks[1],
            ClickMark {
                position: Point::new(9.0, 9.0),
                button: MouseButton::Left,
                pressed: false,
            }
        );
    }

    #[test]
    fn test_extent_grows_with_resize() {
        let track =
            MovementTrack::from_session_text("f30;w100;h80;c;ac50,200c300,10cbad").unwrap();
        assert_eq!(track.extent, (300.0, 200.0));
        assert!(track.paths.is_empty());
    }

    #[test]
    fn test_segment_count_with_empty_path() {
        let track = MovementTrack {
            paths: vec![Vec::new(), vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]],
            ..Default::default()
        };
        assert_eq!(track.segment_count(), 1);
        assert_eq!(track.path_length(), 1.0);
    }
}
