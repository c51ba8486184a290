//! Client-side navigation links for velox trees.
//!
//! A [`NavLink`] renders an `a` element and turns plain clicks on same-origin
//! links into a `NAVIGATE` action on the injected [`DispatchContext`].
//! Everything else falls through to the browser.

pub mod context;
pub mod error;
pub mod location;
pub mod nav_link;
pub mod params;

pub use context::{ActionContext, DispatchContext, NAVIGATE, NavigatePayload, NavigationType, Router};
pub use error::NavError;
pub use location::{HrefKind, Location};
pub use nav_link::{ClickOutcome, Disposition, NavLink, NavLinkProps, PassReason};
pub use params::{NavParams, ParamValue};
