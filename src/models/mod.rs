pub mod declaration;
pub mod instruction;

pub use declaration::{AdditionalTarget, Content, ContentFn, NotificationKind, TargetDeclaration};
pub use instruction::{DispatchSummary, SendInstruction, SendOutcome};
