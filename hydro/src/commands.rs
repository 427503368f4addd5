use serde::{Deserialize, Serialize};

/// Snapshot of the logical movement commands held during one frame.
///
/// The physics never listens for input itself; the host samples whatever
/// device it owns and hands over one of these per step. Dropping focus is
/// simply `MoveCommands::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCommands {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub boost: bool,
}

impl MoveCommands {
    pub const FORWARD: Self = Self { forward: true, back: false, left: false, right: false, boost: false };

    /// Build from browser-style key codes (`KeyW`, `ArrowUp`, `ShiftLeft`, ...).
    /// Unknown codes are ignored.
    pub fn from_key_codes<'a, I>(codes: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cmd = Self::default();
        for code in codes {
            match code {
                "KeyW" | "ArrowUp" => cmd.forward = true,
                "KeyS" | "ArrowDown" => cmd.back = true,
                "KeyA" | "ArrowLeft" => cmd.left = true,
                "KeyD" | "ArrowRight" => cmd.right = true,
                "ShiftLeft" | "ShiftRight" => cmd.boost = true,
                _ => {}
            }
        }
        cmd
    }

    /// Signed (forward, side) command in {-1, 0, 1}; +side is to the right.
    pub fn axes(&self) -> (f32, f32) {
        let fwd = (self.forward as i8 - self.back as i8) as f32;
        let side = (self.right as i8 - self.left as i8) as f32;
        (fwd, side)
    }

    /// True when any directional command survives cancellation.
    pub fn has_direction(&self) -> bool {
        let (f, s) = self.axes();
        f != 0.0 || s != 0.0
    }
}
