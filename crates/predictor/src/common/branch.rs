//! Branch Descriptors.
//!
//! This module describes a resolved control-transfer instruction as the driver
//! reports it. It provides the following:
//! 1. **Classification:** Conditional branches, calls, returns and plain jumps.
//! 2. **Flag Conversion:** Builds a descriptor from the driver's raw
//!    `(conditional, call, return, direct)` flags.
//! 3. **Opaque Payload:** The target address and the direct/indirect flag are carried
//!    through untouched; no direction predictor consults them.

/// Kind of control-transfer instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BranchKind {
    /// Conditional branch; the only kind that trains a direction predictor.
    Conditional,
    /// Function call (unconditional).
    Call,
    /// Function return (unconditional).
    Return,
    /// Any other unconditional jump.
    Jump,
}

impl BranchKind {
    /// Classifies a branch from the driver's raw flags.
    ///
    /// `conditional` wins over the other flags; a record flagged as both call and
    /// return is treated as a call.
    pub fn from_flags(conditional: bool, call: bool, ret: bool) -> Self {
        if conditional {
            Self::Conditional
        } else if call {
            Self::Call
        } else if ret {
            Self::Return
        } else {
            Self::Jump
        }
    }

    /// Returns `true` for conditional branches.
    #[inline(always)]
    pub fn is_conditional(self) -> bool {
        matches!(self, Self::Conditional)
    }
}

/// A resolved control-transfer instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Branch {
    /// Address of the branch instruction.
    pub pc: u32,
    /// Target address. Accepted and ignored by every direction predictor.
    pub target: u32,
    /// Instruction kind.
    pub kind: BranchKind,
    /// Whether the target is encoded in the instruction. Accepted and ignored.
    pub direct: bool,
}

impl Branch {
    /// Creates a direct conditional branch at `pc`.
    pub fn conditional(pc: u32, target: u32) -> Self {
        Self {
            pc,
            target,
            kind: BranchKind::Conditional,
            direct: true,
        }
    }

    /// Creates a branch descriptor from the driver's raw flags.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch instruction.
    /// * `target` - Target address.
    /// * `conditional` - The branch is conditional.
    /// * `call` - The branch is a function call.
    /// * `ret` - The branch is a function return.
    /// * `direct` - The target is encoded in the instruction.
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn from_flags(
        pc: u32,
        target: u32,
        conditional: bool,
        call: bool,
        ret: bool,
        direct: bool,
    ) -> Self {
        Self {
            pc,
            target,
            kind: BranchKind::from_flags(conditional, call, ret),
            direct,
        }
    }

    /// Returns `true` if this branch trains the direction predictor.
    #[inline(always)]
    pub fn is_conditional(&self) -> bool {
        self.kind.is_conditional()
    }
}
