//! Normalized per-tick input intent. The input collaborator resolves
//! whatever devices it likes into this one struct; the simulation never
//! sees keys, mice or touches.

#[derive(Debug, Clone, Copy, Default)]
pub struct InputIntent {
    /// Forward axis relative to facing: +1 ahead, -1 back.
    pub forward: f32,
    /// Strafe axis relative to facing: +1 right, -1 left.
    pub strafe: f32,
    /// Rotation delta in radians for this tick.
    pub turn: f32,
    /// Edge-triggered fire request (one per press).
    pub fire: bool,
}
