//! Navigation-related state types.
//!
//! This module contains the routes, the bottom bar tabs and the `Navigator`
//! that keeps the back-history stack. Each intent is expressed as a
//! `navigate` call with its own `NavOptions`, so the clearing rule for every
//! intent can be tuned independently through `NavPolicies`.

use crate::store::RecipeId;
use log::*;
use std::fmt;
use std::mem;

/// Specifying the different routes.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Route {
    Home,
    Add,
    Settings,
    Detail(RecipeId),
}

impl Route {
    /// Whether both routes lead to the same destination, ignoring any
    /// parameter (every `Detail` shares one destination).
    ///
    pub fn same_destination(&self, other: &Route) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    /// Return the tab this route belongs to, if any.
    ///
    pub fn tab(&self) -> Option<Tab> {
        match self {
            Route::Home => Some(Tab::Home),
            Route::Add => Some(Tab::Add),
            Route::Settings => Some(Tab::Settings),
            Route::Detail(_) => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "home"),
            Route::Add => write!(f, "add"),
            Route::Settings => write!(f, "settings"),
            Route::Detail(id) => write!(f, "detail/{}", id),
        }
    }
}

/// Specifying the bottom bar tabs.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tab {
    Home,
    Add,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Add, Tab::Settings];

    pub fn route(&self) -> Route {
        match self {
            Tab::Home => Route::Home,
            Tab::Add => Route::Add,
            Tab::Settings => Route::Settings,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Add => "Add",
            Tab::Settings => "Settings",
        }
    }
}

/// Pop entries down to the most recent one matching `marker` before
/// navigating.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PopUpTo {
    pub marker: Route,
    pub inclusive: bool,
}

/// Options applied to a single navigation.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct NavOptions {
    pub pop_up_to: Option<PopUpTo>,
    /// Skip the push when the top entry already is the target route.
    pub single_top: bool,
}

impl NavOptions {
    /// Plain push.
    ///
    pub fn push() -> Self {
        NavOptions::default()
    }

    pub fn single_top() -> Self {
        NavOptions {
            single_top: true,
            ..NavOptions::default()
        }
    }

    pub fn pop_up_to(mut self, marker: Route, inclusive: bool) -> Self {
        self.pop_up_to = Some(PopUpTo { marker, inclusive });
        self
    }
}

/// Navigation options per intent.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavPolicies {
    pub select_recipe: NavOptions,
    pub home_tab: NavOptions,
    pub add_tab: NavOptions,
    pub settings_tab: NavOptions,
    pub add_submitted: NavOptions,
}

impl Default for NavPolicies {
    fn default() -> Self {
        NavPolicies {
            select_recipe: NavOptions::push(),
            home_tab: NavOptions::single_top().pop_up_to(Route::Home, true),
            add_tab: NavOptions::single_top(),
            settings_tab: NavOptions::single_top(),
            add_submitted: NavOptions::single_top().pop_up_to(Route::Home, false),
        }
    }
}

/// Keeps the back-history stack. The top entry is the current route and the
/// stack never becomes empty.
///
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
    policies: NavPolicies,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new()
    }
}

impl Navigator {
    /// Return a navigator at `Home` using the default policies.
    ///
    pub fn new() -> Self {
        Navigator::with_policies(NavPolicies::default())
    }

    pub fn with_policies(policies: NavPolicies) -> Self {
        Navigator {
            history: vec![Route::Home],
            policies,
        }
    }

    /// Return the current route.
    ///
    pub fn current(&self) -> &Route {
        // history always holds at least the root entry
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub fn policies(&self) -> &NavPolicies {
        &self.policies
    }

    /// Push a route onto the history stack.
    ///
    pub fn push(&mut self, route: Route) -> &mut Self {
        self.history.push(route);
        self
    }

    /// Pop the current route. The root entry is never popped.
    ///
    pub fn pop(&mut self) -> Option<Route> {
        if self.history.len() > 1 {
            self.history.pop()
        } else {
            None
        }
    }

    /// Pop entries above the most recent one with the same destination as
    /// `marker`, popping that entry too when `inclusive`. The root entry is
    /// kept. Returns the number of popped entries; nothing is popped when no
    /// entry matches.
    ///
    pub fn clear_to(&mut self, marker: &Route, inclusive: bool) -> usize {
        self.truncate_to(marker, inclusive, 1)
    }

    fn truncate_to(&mut self, marker: &Route, inclusive: bool, keep: usize) -> usize {
        let Some(index) = self
            .history
            .iter()
            .rposition(|route| route.same_destination(marker))
        else {
            return 0;
        };
        let len = (if inclusive { index } else { index + 1 }).max(keep);
        let popped = self.history.len().saturating_sub(len);
        self.history.truncate(len);
        popped
    }

    /// Navigate to `route` applying the given options.
    ///
    pub fn navigate(&mut self, route: Route, options: &NavOptions) -> &mut Self {
        if let Some(pop_up_to) = options.pop_up_to {
            // The push below restores a root if the pop empties the stack.
            self.truncate_to(&pop_up_to.marker, pop_up_to.inclusive, 0);
        }
        let on_top = self.history.last() == Some(&route);
        if !(options.single_top && on_top) {
            self.history.push(route);
        }
        debug!("Navigated to {} (history: {})", route, self.history.len());
        self
    }

    /// Open the detail route for a recipe.
    ///
    pub fn select_recipe(&mut self, id: RecipeId) -> &mut Self {
        let options = self.policies.select_recipe;
        self.navigate(Route::Detail(id), &options)
    }

    /// Return to the previous route. Returns false when already at the root.
    ///
    pub fn go_back(&mut self) -> bool {
        match self.pop() {
            Some(popped) => {
                debug!("Back from {} to {}", popped, self.current());
                true
            }
            None => false,
        }
    }

    /// Switch to the given tab.
    ///
    pub fn activate_tab(&mut self, tab: Tab) -> &mut Self {
        let options = match tab {
            Tab::Home => self.policies.home_tab,
            Tab::Add => self.policies.add_tab,
            Tab::Settings => self.policies.settings_tab,
        };
        self.navigate(tab.route(), &options)
    }

    /// Leave the add form after a recipe was stored.
    ///
    pub fn add_submitted(&mut self) -> &mut Self {
        let options = self.policies.add_submitted;
        self.navigate(Route::Home, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_home() {
        let navigator = Navigator::new();
        assert_eq!(*navigator.current(), Route::Home);
        assert_eq!(navigator.history(), &[Route::Home]);
    }

    #[test]
    fn route_display() {
        assert_eq!(Route::Home.to_string(), "home");
        assert_eq!(Route::Add.to_string(), "add");
        assert_eq!(Route::Settings.to_string(), "settings");
        assert_eq!(Route::Detail(7).to_string(), "detail/7");
    }

    #[test]
    fn same_destination_ignores_detail_id() {
        assert!(Route::Detail(1).same_destination(&Route::Detail(2)));
        assert!(!Route::Detail(1).same_destination(&Route::Home));
        assert!(Route::Add.same_destination(&Route::Add));
    }

    #[test]
    fn route_tab() {
        assert_eq!(Route::Home.tab(), Some(Tab::Home));
        assert_eq!(Route::Add.tab(), Some(Tab::Add));
        assert_eq!(Route::Settings.tab(), Some(Tab::Settings));
        assert_eq!(Route::Detail(3).tab(), None);
        for tab in Tab::ALL {
            assert_eq!(tab.route().tab(), Some(tab));
        }
    }

    #[test]
    fn select_then_back() {
        let mut navigator = Navigator::new();
        navigator.select_recipe(2);
        assert_eq!(*navigator.current(), Route::Detail(2));
        assert!(navigator.go_back());
        assert_eq!(*navigator.current(), Route::Home);
    }

    #[test]
    fn back_at_root_is_noop() {
        let mut navigator = Navigator::new();
        assert!(!navigator.go_back());
        assert_eq!(navigator.history(), &[Route::Home]);
    }

    #[test]
    fn back_is_last_in_first_out() {
        let mut navigator = Navigator::new();
        navigator.activate_tab(Tab::Settings);
        navigator.activate_tab(Tab::Add);
        navigator.select_recipe(1);
        assert!(navigator.go_back());
        assert_eq!(*navigator.current(), Route::Add);
        assert!(navigator.go_back());
        assert_eq!(*navigator.current(), Route::Settings);
        assert!(navigator.go_back());
        assert_eq!(*navigator.current(), Route::Home);
    }

    #[test]
    fn repeated_home_tab_never_grows_history() {
        let mut navigator = Navigator::new();
        navigator.select_recipe(1);
        navigator.activate_tab(Tab::Add);
        for _ in 0..5 {
            navigator.activate_tab(Tab::Home);
            assert_eq!(navigator.history(), &[Route::Home]);
        }
        assert!(!navigator.go_back());
    }

    #[test]
    fn tabs_are_single_top() {
        let mut navigator = Navigator::new();
        navigator.activate_tab(Tab::Add);
        navigator.activate_tab(Tab::Add);
        assert_eq!(navigator.history(), &[Route::Home, Route::Add]);
        navigator.activate_tab(Tab::Settings);
        navigator.activate_tab(Tab::Settings);
        assert_eq!(
            navigator.history(),
            &[Route::Home, Route::Add, Route::Settings]
        );
    }

    #[test]
    fn add_submitted_removes_add_from_history() {
        let mut navigator = Navigator::new();
        navigator.activate_tab(Tab::Add);
        navigator.add_submitted();
        assert_eq!(navigator.history(), &[Route::Home]);
        assert!(!navigator.go_back());
    }

    #[test]
    fn add_submitted_clears_everything_above_home() {
        let mut navigator = Navigator::new();
        navigator.select_recipe(1);
        navigator.activate_tab(Tab::Settings);
        navigator.activate_tab(Tab::Add);
        navigator.add_submitted();
        assert_eq!(navigator.history(), &[Route::Home]);
    }

    #[test]
    fn clear_to_keeps_marker_unless_inclusive() {
        let mut navigator = Navigator::new();
        navigator
            .push(Route::Settings)
            .push(Route::Detail(1))
            .push(Route::Add);
        assert_eq!(navigator.clear_to(&Route::Detail(9), false), 1);
        assert_eq!(*navigator.current(), Route::Detail(1));
        assert_eq!(navigator.clear_to(&Route::Detail(9), true), 1);
        assert_eq!(*navigator.current(), Route::Settings);
    }

    #[test]
    fn clear_to_without_match_pops_nothing() {
        let mut navigator = Navigator::new();
        navigator.push(Route::Add);
        assert_eq!(navigator.clear_to(&Route::Settings, true), 0);
        assert_eq!(navigator.history(), &[Route::Home, Route::Add]);
    }

    #[test]
    fn clear_to_never_pops_root() {
        let mut navigator = Navigator::new();
        navigator.push(Route::Add);
        assert_eq!(navigator.clear_to(&Route::Home, true), 1);
        assert_eq!(navigator.history(), &[Route::Home]);
    }

    #[test]
    fn policies_are_configurable_per_intent() {
        let policies = NavPolicies {
            add_submitted: NavOptions::push(),
            ..NavPolicies::default()
        };
        let mut navigator = Navigator::with_policies(policies);
        navigator.activate_tab(Tab::Add);
        navigator.add_submitted();
        assert_eq!(
            navigator.history(),
            &[Route::Home, Route::Add, Route::Home]
        );
        assert_eq!(navigator.policies().add_submitted, NavOptions::push());
    }

    #[test]
    fn select_recipe_always_pushes() {
        let mut navigator = Navigator::new();
        navigator.select_recipe(1);
        navigator.select_recipe(1);
        assert_eq!(
            navigator.history(),
            &[Route::Home, Route::Detail(1), Route::Detail(1)]
        );
    }
}
