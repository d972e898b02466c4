//! Keyboard shortcut mapping.
//!
//! Maps plain keys to semantic `ShortcutAction`s mirroring the UI
//! buttons. The map lives in Rust so WASM and native share one set of
//! bindings. Modifier combos are deliberately left unbound — the
//! browser keeps them.

use crate::input::Modifiers;

/// Actions keyboard shortcuts can trigger. Each has a UI button twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    BrushPoint,
    BrushTriangle,
    BrushCircle,
    /// Toggle the rainbow color cycle.
    ToggleColorCycle,
    ClearCanvas,
    /// Stamp the tree drawing.
    PlantTree,
}

/// Resolves key events into actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value. Returns `None` for
    /// unbound keys and for anything with a modifier held.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        if modifiers.any() {
            return None;
        }
        match key {
            "p" | "P" => Some(ShortcutAction::BrushPoint),
            "t" | "T" => Some(ShortcutAction::BrushTriangle),
            "c" | "C" => Some(ShortcutAction::BrushCircle),
            "r" | "R" => Some(ShortcutAction::ToggleColorCycle),
            "x" | "X" => Some(ShortcutAction::ClearCanvas),
            "g" | "G" => Some(ShortcutAction::PlantTree),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_brush_keys() {
        assert_eq!(
            ShortcutMap::resolve("p", Modifiers::NONE),
            Some(ShortcutAction::BrushPoint)
        );
        assert_eq!(
            ShortcutMap::resolve("t", Modifiers::NONE),
            Some(ShortcutAction::BrushTriangle)
        );
        assert_eq!(
            ShortcutMap::resolve("c", Modifiers::NONE),
            Some(ShortcutAction::BrushCircle)
        );
    }

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(
            ShortcutMap::resolve("X", Modifiers::NONE),
            Some(ShortcutAction::ClearCanvas)
        );
        assert_eq!(
            ShortcutMap::resolve("G", Modifiers::NONE),
            Some(ShortcutAction::PlantTree)
        );
    }

    #[test]
    fn modifiers_leave_keys_to_the_browser() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        assert_eq!(ShortcutMap::resolve("p", ctrl), None);

        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert_eq!(ShortcutMap::resolve("c", meta), None);
    }

    #[test]
    fn unbound_keys_resolve_to_none() {
        assert_eq!(ShortcutMap::resolve("q", Modifiers::NONE), None);
        assert_eq!(ShortcutMap::resolve("Escape", Modifiers::NONE), None);
        assert_eq!(ShortcutMap::resolve("7", Modifiers::NONE), None);
    }
}
