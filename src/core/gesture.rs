use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Pointer gesture that can drive the controller.
///
/// Each kind is tracked separately so a one-finger move and a second-finger
/// look can run at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// Mouse drag with a button held (look without pointer lock)
    MouseLook,
    /// One finger rotating the view
    TouchLook,
    /// One finger dragging to walk
    TouchMove,
    /// Second finger of a two-finger touch rotating the view
    TwoTouchLook,
    /// On-screen virtual stick
    Joystick,
}

impl GestureKind {
    pub const ALL: [GestureKind; 5] = [
        GestureKind::MouseLook,
        GestureKind::TouchLook,
        GestureKind::TouchMove,
        GestureKind::TwoTouchLook,
        GestureKind::Joystick,
    ];

    /// Look gestures rotate on every sample; the others hold an offset that
    /// is consumed once per tick.
    pub const fn is_look(self) -> bool {
        matches!(
            self,
            GestureKind::MouseLook | GestureKind::TouchLook | GestureKind::TwoTouchLook
        )
    }

    const fn index(self) -> usize {
        match self {
            GestureKind::MouseLook => 0,
            GestureKind::TouchLook => 1,
            GestureKind::TouchMove => 2,
            GestureKind::TwoTouchLook => 3,
            GestureKind::Joystick => 4,
        }
    }
}

/// Anchor and most recent sample of one active drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub anchor: Vec2,
    pub last: Vec2,
}

impl Drag {
    pub fn new(at: Vec2) -> Self {
        Self { anchor: at, last: at }
    }

    /// Offset of the latest sample from where the drag began
    pub fn offset(&self) -> Vec2 {
        self.last - self.anchor
    }

    /// Store a new sample and return the movement since the previous one
    pub fn advance(&mut self, to: Vec2) -> Vec2 {
        let delta = to - self.last;
        self.last = to;
        delta
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureSet {
    drags: [Option<Drag>; 5],
}

impl GestureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a gesture anchored at `at`
    pub fn begin(&mut self, kind: GestureKind, at: Vec2) {
        self.drags[kind.index()] = Some(Drag::new(at));
    }

    /// Feed a sample. Returns the delta since the last sample, or `None`
    /// when the gesture was never begun.
    pub fn update(&mut self, kind: GestureKind, at: Vec2) -> Option<Vec2> {
        self.drags[kind.index()].as_mut().map(|drag| drag.advance(at))
    }

    /// Stop tracking a gesture. Returns whether it was active.
    pub fn end(&mut self, kind: GestureKind) -> bool {
        self.drags[kind.index()].take().is_some()
    }

    pub fn get(&self, kind: GestureKind) -> Option<&Drag> {
        self.drags[kind.index()].as_ref()
    }

    pub fn is_active(&self, kind: GestureKind) -> bool {
        self.get(kind).is_some()
    }

    /// Offset from the anchor, zero when inactive
    pub fn offset(&self, kind: GestureKind) -> Vec2 {
        self.get(kind).map_or(Vec2::ZERO, Drag::offset)
    }

    pub fn clear(&mut self) {
        self.drags = [None; 5];
    }
}
