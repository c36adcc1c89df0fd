use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Coordinate;

/// Tooltip anchor relative to the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TooltipPosition {
    #[default]
    LeftBottom,
    LeftTop,
    RightBottom,
    RightTop,
}

/// Pointer event raised by a rendered slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Slice under the pointer: series position, record position and label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverTarget {
    pub series_index: usize,
    pub record_index: usize,
    pub name: String,
}

impl HoverTarget {
    #[must_use]
    pub fn new(series_index: usize, record_index: usize, name: impl Into<String>) -> Self {
        Self {
            series_index,
            record_index,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HoverEvent {
    Enter {
        target: HoverTarget,
        source: PointerEvent,
    },
    Leave {
        source: PointerEvent,
    },
}

/// Callback to run once the transition producing it has been committed.
#[derive(Debug, Clone, PartialEq)]
pub enum HoverEffect {
    NotifyEnter {
        target: HoverTarget,
        source: PointerEvent,
    },
    NotifyLeave {
        source: PointerEvent,
    },
}

/// Tooltip visibility state shared with the tooltip renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    pub is_tooltip_active: bool,
    pub active_tooltip_label: String,
    pub active_tooltip_position: TooltipPosition,
    pub active_tooltip_coord: Coordinate,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            is_tooltip_active: false,
            active_tooltip_label: String::new(),
            active_tooltip_position: TooltipPosition::LeftBottom,
            active_tooltip_coord: Coordinate::default(),
        }
    }
}

/// Pure hover transition.
///
/// Enter always lands in the active state, replacing label and coordinate;
/// leave always lands in the idle state and keeps the last label around.
#[must_use]
pub fn transition(
    state: &InteractionState,
    event: &HoverEvent,
) -> (InteractionState, HoverEffect) {
    match event {
        HoverEvent::Enter { target, source } => (
            InteractionState {
                is_tooltip_active: true,
                active_tooltip_label: target.name.clone(),
                active_tooltip_position: state.active_tooltip_position,
                active_tooltip_coord: Coordinate::new(source.x, source.y),
            },
            HoverEffect::NotifyEnter {
                target: target.clone(),
                source: *source,
            },
        ),
        HoverEvent::Leave { source } => (
            InteractionState {
                is_tooltip_active: false,
                ..state.clone()
            },
            HoverEffect::NotifyLeave { source: *source },
        ),
    }
}

/// Receives the hovered slice, the pointer event and the already committed state.
pub type EnterCallback = Box<dyn FnMut(&HoverTarget, &PointerEvent, &InteractionState)>;
pub type LeaveCallback = Box<dyn FnMut(&PointerEvent, &InteractionState)>;
pub type ClickCallback = Box<dyn FnMut(&HoverTarget, &PointerEvent)>;

/// Host callbacks notified after hover transitions.
#[derive(Default)]
pub struct HoverCallbacks {
    on_mouse_enter: Option<EnterCallback>,
    on_mouse_leave: Option<LeaveCallback>,
    on_click: Option<ClickCallback>,
}

impl HoverCallbacks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_mouse_enter(
        mut self,
        callback: impl FnMut(&HoverTarget, &PointerEvent, &InteractionState) + 'static,
    ) -> Self {
        self.on_mouse_enter = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_mouse_leave(
        mut self,
        callback: impl FnMut(&PointerEvent, &InteractionState) + 'static,
    ) -> Self {
        self.on_mouse_leave = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_click(
        mut self,
        callback: impl FnMut(&HoverTarget, &PointerEvent) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    fn apply(&mut self, effect: &HoverEffect, state: &InteractionState) {
        match effect {
            HoverEffect::NotifyEnter { target, source } => {
                if let Some(callback) = self.on_mouse_enter.as_mut() {
                    callback(target, source, state);
                }
            }
            HoverEffect::NotifyLeave { source } => {
                if let Some(callback) = self.on_mouse_leave.as_mut() {
                    callback(source, state);
                }
            }
        }
    }
}

impl fmt::Debug for HoverCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoverCallbacks")
            .field("on_mouse_enter", &self.on_mouse_enter.is_some())
            .field("on_mouse_leave", &self.on_mouse_leave.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

/// Owns the interaction state and applies hover events to it.
///
/// Each dispatch commits the new state before any host callback runs, and
/// hands that committed state to the callback.
#[derive(Debug, Default)]
pub struct InteractionStateMachine {
    state: InteractionState,
    callbacks: HoverCallbacks,
}

impl InteractionStateMachine {
    #[must_use]
    pub fn new(callbacks: HoverCallbacks) -> Self {
        Self {
            state: InteractionState::default(),
            callbacks,
        }
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    #[must_use]
    pub fn is_tooltip_active(&self) -> bool {
        self.state.is_tooltip_active
    }

    pub fn dispatch(&mut self, event: HoverEvent) -> &InteractionState {
        let (next, effect) = transition(&self.state, &event);
        trace!(
            was_active = self.state.is_tooltip_active,
            active = next.is_tooltip_active,
            "commit hover transition"
        );
        self.state = next;
        self.callbacks.apply(&effect, &self.state);
        &self.state
    }

    pub fn hover_enter(&mut self, target: HoverTarget, source: PointerEvent) -> &InteractionState {
        self.dispatch(HoverEvent::Enter { target, source })
    }

    pub fn hover_leave(&mut self, source: PointerEvent) -> &InteractionState {
        self.dispatch(HoverEvent::Leave { source })
    }

    /// Forwards a click to the host; state is left untouched.
    pub fn click(&mut self, target: &HoverTarget, source: &PointerEvent) {
        if let Some(callback) = self.callbacks.on_click.as_mut() {
            callback(target, source);
        }
    }

    pub fn set_callbacks(&mut self, callbacks: HoverCallbacks) {
        self.callbacks = callbacks;
    }

    pub fn reset(&mut self) {
        self.state = InteractionState::default();
    }
}
