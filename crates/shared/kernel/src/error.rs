use shelf_domain::device::RootViewId;
use std::borrow::Cow;

/// Failures of the startup sequence.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// The selected root view could not be obtained. Never recovered locally.
    #[error("Root view '{view}' could not be resolved{}: {message}", format_context(.context))]
    ViewResolution {
        view: RootViewId,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The host refused the application (missing element, second mount).
    #[error("Mount at '#{mount_id}' failed{}: {message}", format_context(.context))]
    Mount {
        mount_id: Cow<'static, str>,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },
}

impl BootstrapError {
    pub fn view_resolution(view: RootViewId, message: impl Into<Cow<'static, str>>) -> Self {
        Self::ViewResolution { view, message: message.into(), context: None }
    }

    pub fn mount(
        mount_id: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::Mount { mount_id: mount_id.into(), message: message.into(), context: None }
    }
}

pub trait BootstrapErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, BootstrapError>;
}

impl<T> BootstrapErrorExt<T> for Result<T, BootstrapError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                BootstrapError::ViewResolution { context: c, .. }
                | BootstrapError::Mount { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

/// Violations of the routing table invariants.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    #[error("Duplicate route path{}: {path}", format_context(.context))]
    DuplicatePath { path: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Duplicate route name{}: {name}", format_context(.context))]
    DuplicateName { name: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Paths must be absolute and carry neither a query nor a fragment.
    #[error("Invalid route path{}: '{path}'", format_context(.context))]
    InvalidPath { path: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub trait RoutingErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, RoutingError>;
}

impl<T> RoutingErrorExt<T> for Result<T, RoutingError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                RoutingError::DuplicatePath { context: c, .. }
                | RoutingError::DuplicateName { context: c, .. }
                | RoutingError::InvalidPath { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let err: Result<(), BootstrapError> =
            Err(BootstrapError::view_resolution(RootViewId::Mobile, "bundle missing"));
        let err = err.context("startup").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Root view 'mobile' could not be resolved (startup): bundle missing"
        );
    }

    #[test]
    fn message_without_context_has_no_parentheses() {
        let err = BootstrapError::mount("app", "element not found");
        assert_eq!(err.to_string(), "Mount at '#app' failed: element not found");
    }

    #[test]
    fn routing_context_overrides_previous_value() {
        let err: Result<(), RoutingError> =
            Err(RoutingError::InvalidPath { path: "about".into(), context: Some("old".into()) });
        let err = err.context("new").unwrap_err();

        assert_eq!(err.to_string(), "Invalid route path (new): 'about'");
    }
}
