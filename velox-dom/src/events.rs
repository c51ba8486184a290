use std::collections::HashMap;

use tracing::debug;

use crate::VNode;

/// Which mouse button produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Primary,
    /// Usually the wheel / middle button.
    Auxiliary,
    Secondary,
    Other(u16),
}

impl MouseButton {
    /// Maps a DOM `MouseEvent.button` index.
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => MouseButton::Primary,
            1 => MouseButton::Auxiliary,
            2 => MouseButton::Secondary,
            n => MouseButton::Other(n),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.shift || self.meta || self.alt
    }
}

/// A click delivered to a mounted tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub modifiers: Modifiers,
    pub default_prevented: bool,
    /// Tag of the element whose handler is running; set by [`dispatch`].
    pub target: Option<String>,
}

impl ClickEvent {
    pub fn primary() -> Self {
        Self::default()
    }
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Primary button with no ctrl/shift/meta/alt held.
    pub fn is_plain_primary_click(&self) -> bool {
        self.button == MouseButton::Primary && !self.modifiers.any()
    }
}

type Handler = Box<dyn FnMut(&mut ClickEvent)>;

pub struct EventRegistry {
    handlers: HashMap<String, Handler>,
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EventRegistry {
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }
    pub fn on<F: FnMut(&mut ClickEvent) + 'static>(&mut self, name: impl Into<String>, f: F) {
        self.handlers.insert(name.into(), Box::new(f));
    }
    pub fn remove(&mut self, name: &str) {
        self.handlers.remove(name);
    }
    pub fn has(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }
}

/// Dispatches an event by scanning the VNode tree for props of the form
/// `on:<event>` and invoking the registered callback of that name with `ev`.
/// Returns the number of callbacks invoked.
pub fn dispatch(event: &str, root: &VNode, registry: &mut EventRegistry, ev: &mut ClickEvent) -> usize {
    let key = format!("on:{}", event);
    fn walk(node: &VNode, key: &str, out: &mut Vec<(String, String)>) {
        match node {
            VNode::Text(_) => {}
            VNode::Element { tag, props, children } => {
                if let Some(v) = props.get(key) {
                    out.push((v.to_string(), tag.clone()));
                }
                for c in children {
                    walk(c, key, out);
                }
            }
        }
    }
    let mut targets = Vec::new();
    walk(root, &key, &mut targets);

    let mut invoked = 0;
    for (name, tag) in targets {
        match registry.handlers.get_mut(&name) {
            Some(cb) => {
                ev.target = Some(tag);
                cb(ev);
                invoked += 1;
            }
            None => debug!(event_name = event, handler = %name, "no handler registered"),
        }
    }
    invoked
}
