use tracing::info;

/// Client-side router the dashboard hands its route changes to
pub trait Navigator {
    fn push(&mut self, target: &str);
}

/// Navigator that records every route change it is given
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    history: Vec<String>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for HistoryNavigator {
    fn push(&mut self, target: &str) {
        info!("Navigating to {}", target);
        self.history.push(target.to_string());
    }
}

/// Fixed destinations reachable from the navigation bar and quick actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Logo
    Home,
    AddListing,
    Profile,
    LogIn,
    BrowseAll,
    CreateListing,
}

impl NavAction {
    /// Route for this action given whether someone is signed in
    pub fn route(self, signed_in: bool) -> &'static str {
        match self {
            NavAction::Home => "/dashboard",
            NavAction::AddListing => "/create-listing",
            NavAction::Profile => "/profile",
            NavAction::LogIn => "/auth",
            NavAction::BrowseAll => "/listings",
            NavAction::CreateListing if signed_in => "/create-listing",
            NavAction::CreateListing => "/auth",
        }
    }
}
