//! Scene identity and pending transition requests.
//!
//! A scene asks for a switch by setting its [`NextScene`] while handling
//! input. The [`SceneController`](crate::game::SceneController) takes the
//! request once per frame, which also clears it.

/// Screens the demo can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SceneKind {
    #[default]
    Gameplay,
    Menu,
}

/// Representation of a requested next scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(SceneKind),
}

/// One-shot transition request owned by a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    /// Create a new value initialized to [`NextScenes::Unchanged`].
    pub fn new() -> Self {
        Self {
            next: NextScenes::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> &NextScenes {
        &self.next
    }

    /// Request a transition to `next`. A later request in the same frame wins.
    pub fn set(&mut self, next: SceneKind) {
        self.next = NextScenes::Pending(next);
    }

    /// Reset to [`NextScenes::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextScenes::Unchanged;
    }

    /// Return the pending scene, if any, and reset.
    pub fn take(&mut self) -> Option<SceneKind> {
        let next = self.next;
        self.reset();
        match next {
            NextScenes::Pending(kind) => Some(kind),
            NextScenes::Unchanged => None,
        }
    }
}
