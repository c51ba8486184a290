use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use tracing::debug;
use velox_dom::events::{ClickEvent, EventRegistry};
use velox_dom::{h, Props, VNode};

use crate::context::{DispatchContext, NAVIGATE, NavigatePayload};
use crate::location::{HrefKind, Location};
use crate::params::{NavParams, ParamValue};

/// Returned by a caller-supplied click handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The handler dealt with the click; the link does nothing further.
    Handled,
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassReason {
    ModifiedClick,
    NoHref,
    Anchor,
    External,
    NoContext,
}

/// What the link did with a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    HandledByOverride,
    Navigated(String),
    /// Left to the browser's default behaviour.
    PassThrough(PassReason),
}

#[derive(Clone, Default)]
pub struct NavLinkProps {
    pub route_name: Option<String>,
    pub nav_params: Option<NavParams>,
    pub href: Option<String>,
    pub context: Option<Rc<dyn DispatchContext>>,
    pub on_click: Option<Rc<dyn Fn(&mut ClickEvent) -> ClickOutcome>>,
    pub attrs: HashMap<String, String>,
    pub children: Vec<VNode>,
}

impl NavLinkProps {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn route_name(mut self, name: impl Into<String>) -> Self {
        self.route_name = Some(name.into());
        self
    }
    pub fn nav_params(mut self, params: NavParams) -> Self {
        self.nav_params = Some(params);
        self
    }
    pub fn param(mut self, k: impl Into<String>, v: impl Into<ParamValue>) -> Self {
        self.nav_params
            .get_or_insert_with(NavParams::new)
            .insert(k.into(), v.into());
        self
    }
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
    pub fn context(mut self, ctx: Rc<dyn DispatchContext>) -> Self {
        self.context = Some(ctx);
        self
    }
    pub fn on_click<F>(mut self, f: F) -> Self
    where
        F: Fn(&mut ClickEvent) -> ClickOutcome + 'static,
    {
        self.on_click = Some(Rc::new(f));
        self
    }
    pub fn attr(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.attrs.insert(k.into(), v.into());
        self
    }
    pub fn child(mut self, node: VNode) -> Self {
        self.children.push(node);
        self
    }
    pub fn children(mut self, nodes: Vec<VNode>) -> Self {
        self.children.extend(nodes);
        self
    }
}

impl fmt::Debug for NavLinkProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavLinkProps")
            .field("route_name", &self.route_name)
            .field("nav_params", &self.nav_params)
            .field("href", &self.href)
            .field("context", &self.context.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("attrs", &self.attrs)
            .field("children", &self.children.len())
            .finish()
    }
}

const DEFAULT_HANDLER: &str = "navlink";

/// An `a` element that navigates client-side on plain same-origin clicks.
#[derive(Debug)]
pub struct NavLink {
    props: NavLinkProps,
    location: Location,
    handler_name: String,
}

impl NavLink {
    pub fn new(props: NavLinkProps, location: Location) -> Self {
        Self {
            props,
            location,
            handler_name: DEFAULT_HANDLER.to_string(),
        }
    }

    /// Name under which the click handler is registered; must be unique per registry.
    pub fn with_handler_name(mut self, name: impl Into<String>) -> Self {
        self.handler_name = name.into();
        self
    }

    pub fn props(&self) -> &NavLinkProps {
        &self.props
    }

    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// `href` if given, else the context's path for `route_name`.
    pub fn effective_href(&self) -> Option<String> {
        if let Some(href) = self.props.href.as_deref().filter(|h| !h.is_empty()) {
            return Some(href.to_string());
        }
        let ctx = self.props.context.as_ref()?;
        let route = self.props.route_name.as_deref()?;
        let empty = NavParams::new();
        let params = self.props.nav_params.as_ref().unwrap_or(&empty);
        Some(ctx.make_path(route, params))
    }

    pub fn render(&self) -> VNode {
        let mut props = Props::from(self.props.attrs.clone());
        props.attrs.remove("href");
        if let Some(href) = self.effective_href() {
            props = props.set("href", href);
        }
        props = props.set("on:click", self.handler_name.clone());
        h("a", props, self.props.children.clone())
    }

    pub fn handle_click(&self, ev: &mut ClickEvent) -> Disposition {
        if let Some(on_click) = &self.props.on_click {
            if on_click(ev) == ClickOutcome::Handled {
                debug!(handler = %self.handler_name, "click handled by override");
                return Disposition::HandledByOverride;
            }
        }

        let href = self.effective_href();
        let outcome = self.intercept(ev, href.as_deref());
        match &outcome {
            Disposition::Navigated(path) => debug!(?href, %path, "client-side navigation"),
            Disposition::PassThrough(reason) => debug!(?href, ?reason, "click left to browser"),
            Disposition::HandledByOverride => {}
        }
        outcome
    }

    fn intercept(&self, ev: &mut ClickEvent, href: Option<&str>) -> Disposition {
        if !ev.is_plain_primary_click() {
            return Disposition::PassThrough(PassReason::ModifiedClick);
        }
        let Some(href) = href else {
            return Disposition::PassThrough(PassReason::NoHref);
        };
        let path = match self.location.classify(href) {
            HrefKind::Anchor => return Disposition::PassThrough(PassReason::Anchor),
            HrefKind::External => return Disposition::PassThrough(PassReason::External),
            HrefKind::Internal(path) => path,
        };
        let Some(ctx) = &self.props.context else {
            return Disposition::PassThrough(PassReason::NoContext);
        };

        ev.prevent_default();
        let params = self.props.nav_params.clone().unwrap_or_default();
        ctx.execute_action(NAVIGATE, NavigatePayload::click(path.clone(), params));
        Disposition::Navigated(path)
    }

    /// Binds [`NavLink::handle_click`] into `registry` under the handler name.
    pub fn register(self: &Rc<Self>, registry: &mut EventRegistry) {
        let link = Rc::clone(self);
        registry.on(self.handler_name.clone(), move |ev: &mut ClickEvent| {
            link.handle_click(ev);
        });
    }
}
