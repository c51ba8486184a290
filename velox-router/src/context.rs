use serde::Serialize;

use crate::params::NavParams;

/// Action name dispatched for client-side navigation.
pub const NAVIGATE: &str = "NAVIGATE";

/// Builds paths from named routes.
pub trait Router {
    fn make_path(&self, route_name: &str, params: &NavParams) -> String;
}

/// The capabilities a link needs from its application context: path building
/// and action execution.
pub trait DispatchContext: Router {
    fn execute_action(&self, action_name: &str, payload: NavigatePayload);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationType {
    Click,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigatePayload {
    #[serde(rename = "type")]
    pub kind: NavigationType,
    pub path: String,
    pub params: NavParams,
}

impl NavigatePayload {
    pub fn click(path: impl Into<String>, params: NavParams) -> Self {
        Self {
            kind: NavigationType::Click,
            path: path.into(),
            params,
        }
    }
}

type ActionSink = Box<dyn Fn(&str, NavigatePayload)>;

/// A [`DispatchContext`] assembled from a router and an action callback.
pub struct ActionContext<R> {
    router: R,
    sink: ActionSink,
}

impl<R: Router> ActionContext<R> {
    pub fn new<F>(router: R, sink: F) -> Self
    where
        F: Fn(&str, NavigatePayload) + 'static,
    {
        Self {
            router,
            sink: Box::new(sink),
        }
    }

    pub fn router(&self) -> &R {
        &self.router
    }
}

impl<R: Router> Router for ActionContext<R> {
    fn make_path(&self, route_name: &str, params: &NavParams) -> String {
        self.router.make_path(route_name, params)
    }
}

impl<R: Router> DispatchContext for ActionContext<R> {
    fn execute_action(&self, action_name: &str, payload: NavigatePayload) {
        (self.sink)(action_name, payload)
    }
}
