pub mod brush;
pub mod input;
pub mod session;
pub mod shortcuts;
pub mod workbench;

pub use brush::{BrushKind, BrushSettings, BrushTool};
pub use input::{InputEvent, Modifiers};
pub use session::{PaintSession, SceneMutation};
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use workbench::{Operation, VectorWorkbench, WorkbenchReport};
