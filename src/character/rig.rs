use crate::animation::{FrameUpdate, Part, PartWrite};
use crate::scene::{NodeHandle, Scene};

/// Maps every animated [`Part`] to its node in the scene.
///
/// Handles are non-owning; the scene keeps the nodes alive for as long as
/// the model exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TomatoRig {
    handles: [NodeHandle; Part::COUNT],
}

impl TomatoRig {
    #[must_use]
    pub fn new(handles: [NodeHandle; Part::COUNT]) -> Self {
        Self { handles }
    }

    #[inline]
    #[must_use]
    pub fn handle(&self, part: Part) -> NodeHandle {
        self.handles[part.index()]
    }

    /// Writes a frame's updates onto the scene. Parts whose node has been
    /// removed are skipped.
    pub fn apply(&self, update: &FrameUpdate, scene: &mut Scene) {
        for write in &update.writes {
            self.apply_one(write, scene);
        }
    }

    fn apply_one(&self, write: &PartWrite, scene: &mut Scene) {
        let Some(node) = scene.get_node_mut(self.handle(write.part)) else {
            log::warn!("Rig part {:?} has no node in the scene", write.part);
            return;
        };

        if let Some(position) = write.position {
            node.transform.position = position;
        }
        if let Some(rotation) = write.rotation {
            node.transform.set_rotation_euler(rotation.x, rotation.y, rotation.z);
        }
        if let Some(scale) = write.scale {
            node.transform.scale = scale;
        }
        if let Some(visible) = write.visible {
            node.visible = visible;
        }
    }
}
