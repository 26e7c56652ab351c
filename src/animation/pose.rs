use glam::Vec3;
use smallvec::SmallVec;

use super::phase::Phase;

/// Animated parts of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    /// Root group; tilts while chewing.
    Body,
    Fork,
    Slice,
    Mouth,
    LeftEye,
    RightEye,
    LeftPupil,
    RightPupil,
}

impl Part {
    pub const COUNT: usize = 8;

    pub const ALL: [Part; Self::COUNT] = [
        Part::Body,
        Part::Fork,
        Part::Slice,
        Part::Mouth,
        Part::LeftEye,
        Part::RightEye,
        Part::LeftPupil,
        Part::RightPupil,
    ];

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Rest placement of the parts the driver moves, in the body's space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestPose {
    /// Where fork and slice start each Feed phase.
    pub utensil_start: Vec3,
    pub left_pupil: Vec3,
    pub right_pupil: Vec3,
}

impl RestPose {
    pub const DEFAULT: Self = Self {
        utensil_start: Vec3::new(-3.0, -0.3, 1.0),
        left_pupil: Vec3::new(-0.35, 0.25, 1.0),
        right_pupil: Vec3::new(0.35, 0.25, 1.0),
    };
}

impl Default for RestPose {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Partial write onto one part. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartWrite {
    pub part: Part,
    pub position: Option<Vec3>,
    /// XYZ Euler angles in radians.
    pub rotation: Option<Vec3>,
    pub scale: Option<Vec3>,
    pub visible: Option<bool>,
}

impl PartWrite {
    #[must_use]
    pub fn new(part: Part) -> Self {
        Self {
            part,
            position: None,
            rotation: None,
            scale: None,
            visible: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = Some(rotation);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = Some(scale);
        self
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }
}

/// Everything the driver decided for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUpdate {
    pub phase: Phase,
    pub writes: SmallVec<[PartWrite; Part::COUNT]>,
}

impl FrameUpdate {
    #[must_use]
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            writes: SmallVec::new(),
        }
    }

    pub fn push(&mut self, write: PartWrite) {
        self.writes.push(write);
    }

    /// The write targeting `part`, if any.
    #[must_use]
    pub fn get(&self, part: Part) -> Option<&PartWrite> {
        self.writes.iter().find(|w| w.part == part)
    }

    #[must_use]
    pub fn visibility(&self, part: Part) -> Option<bool> {
        self.get(part).and_then(|w| w.visible)
    }
}
