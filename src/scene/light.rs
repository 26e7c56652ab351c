use glam::Vec3;

#[derive(Debug, Clone)]
pub struct SpotLight {
    /// Half-angle of the cone in radians.
    pub angle: f32,
    /// Fraction of the cone, from the edge inward, over which light fades.
    pub penumbra: f32,
}

/// Kinds of light the forward pass knows how to shade.
///
/// Directional and spot lights take their position from the owning node.
/// Both aim at the world origin.
#[derive(Debug, Clone)]
pub enum LightKind {
    Ambient,
    Directional,
    Spot(SpotLight),
}

#[derive(Debug, Clone)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
    pub cast_shadows: bool,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Ambient,
            cast_shadows: false,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Directional,
            cast_shadows: false,
        }
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32, angle: f32, penumbra: f32) -> Self {
        Self {
            color,
            intensity,
            kind: LightKind::Spot(SpotLight {
                angle,
                penumbra: penumbra.clamp(0.0, 1.0),
            }),
            cast_shadows: false,
        }
    }

    #[must_use]
    pub fn with_shadows(mut self, cast_shadows: bool) -> Self {
        self.cast_shadows = cast_shadows;
        self
    }
}
