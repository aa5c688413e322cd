use crate::config::ViewHotkeys;
use crate::logger::LogBuffer;
use crate::store::{Recipe, RecipeId, RecipeStore, Snapshot, Subscription};
use crate::ui::Theme;
use crossterm::event::KeyEvent;
use log::*;
use ratatui::widgets::ListState;

use super::form::AddForm;
use super::navigation::{Navigator, Route, Tab};

/// Number of log lines kept for the log pane.
///
pub const LOG_CAPACITY: usize = 200;

/// Houses data representative of application state.
///
/// The recipe store is injected on construction; `State` subscribes to it
/// and renders from the latest snapshot it received.
pub struct State {
    store: RecipeStore,
    subscription: Subscription,
    recipes: Snapshot,
    navigator: Navigator,
    recipes_list_state: ListState,
    detail_scroll_offset: u16,
    add_form: AddForm,
    theme: Theme,
    hotkeys: ViewHotkeys,
    log_buffer: LogBuffer,
    show_log: bool,
    config_location: Option<String>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State::new(
            RecipeStore::seeded(),
            Theme::default(),
            ViewHotkeys::default(),
            LogBuffer::new(LOG_CAPACITY),
        )
    }
}

impl State {
    pub fn new(
        mut store: RecipeStore,
        theme: Theme,
        hotkeys: ViewHotkeys,
        log_buffer: LogBuffer,
    ) -> Self {
        let mut subscription = store.subscribe();
        let recipes = subscription.latest().unwrap_or_else(|| store.list());
        let mut recipes_list_state = ListState::default();
        if !recipes.is_empty() {
            recipes_list_state.select(Some(0));
        }
        State {
            store,
            subscription,
            recipes,
            navigator: Navigator::new(),
            recipes_list_state,
            detail_scroll_offset: 0,
            add_form: AddForm::default(),
            theme,
            hotkeys,
            log_buffer,
            show_log: false,
            config_location: None,
        }
    }

    /// Return the injected recipe store.
    ///
    pub fn get_store(&self) -> &RecipeStore {
        &self.store
    }

    /// Return the latest recipe snapshot.
    ///
    pub fn get_recipes(&self) -> &Snapshot {
        &self.recipes
    }

    /// Take the newest snapshot published by the store, keeping the list
    /// selection in range. Returns true if a new snapshot arrived.
    ///
    pub fn sync_recipes(&mut self) -> bool {
        let Some(snapshot) = self.subscription.latest() else {
            return false;
        };
        self.recipes = snapshot;
        let len = self.recipes.len();
        let selected = match self.recipes_list_state.selected() {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => Some(0),
        };
        self.recipes_list_state.select(selected);
        true
    }

    /// Return the current route.
    ///
    pub fn current_route(&self) -> &Route {
        self.navigator.current()
    }

    /// Get the length of the back-history stack.
    ///
    pub fn history_len(&self) -> usize {
        self.navigator.history().len()
    }

    /// Highlight the next recipe on the home list.
    ///
    pub fn next_recipe(&mut self) -> &mut Self {
        if self.recipes.is_empty() {
            self.recipes_list_state.select(None);
            return self;
        }
        let current = self.recipes_list_state.selected().unwrap_or(0);
        let next = if current + 1 < self.recipes.len() {
            current + 1
        } else {
            0
        };
        self.recipes_list_state.select(Some(next));
        self
    }

    /// Highlight the previous recipe on the home list.
    ///
    pub fn previous_recipe(&mut self) -> &mut Self {
        if self.recipes.is_empty() {
            self.recipes_list_state.select(None);
            return self;
        }
        let current = self.recipes_list_state.selected().unwrap_or(0);
        let prev = if current > 0 {
            current - 1
        } else {
            self.recipes.len() - 1
        };
        self.recipes_list_state.select(Some(prev));
        self
    }

    pub fn get_recipes_list_state(&mut self) -> &mut ListState {
        &mut self.recipes_list_state
    }

    /// Return the highlighted recipe on the home list.
    ///
    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.recipes_list_state
            .selected()
            .and_then(|index| self.recipes.get(index))
    }

    /// Open the detail route for the highlighted recipe.
    ///
    pub fn select_current_recipe(&mut self) -> &mut Self {
        if let Some(id) = self.selected_recipe().map(|recipe| recipe.id) {
            self.select_recipe(id);
        }
        self
    }

    /// Open the detail route for a recipe.
    ///
    pub fn select_recipe(&mut self, id: RecipeId) -> &mut Self {
        self.detail_scroll_offset = 0;
        self.navigator.select_recipe(id);
        self
    }

    /// Pop back to the previous route. Returns false at the root.
    ///
    pub fn go_back(&mut self) -> bool {
        self.detail_scroll_offset = 0;
        self.navigator.go_back()
    }

    /// Switch to the given tab.
    ///
    pub fn activate_tab(&mut self, tab: Tab) -> &mut Self {
        self.navigator.activate_tab(tab);
        self
    }

    /// Return the recipe shown by the current detail route, if it exists.
    ///
    pub fn get_detail_recipe(&self) -> Option<&Recipe> {
        match self.current_route() {
            Route::Detail(id) => self.store.get_by_id(*id),
            Route::Home | Route::Add | Route::Settings => None,
        }
    }

    pub fn scroll_detail_down(&mut self) -> &mut Self {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_add(1);
        self
    }

    pub fn scroll_detail_up(&mut self) -> &mut Self {
        self.detail_scroll_offset = self.detail_scroll_offset.saturating_sub(1);
        self
    }

    pub fn get_detail_scroll_offset(&self) -> u16 {
        self.detail_scroll_offset
    }

    pub fn get_add_form(&self) -> &AddForm {
        &self.add_form
    }

    pub fn get_add_form_mut(&mut self) -> &mut AddForm {
        &mut self.add_form
    }

    /// Forward typed input to the add form.
    ///
    pub fn add_form_input(&mut self, key: KeyEvent) -> &mut Self {
        self.add_form.input(key);
        self
    }

    /// Store the recipe described by the add form and return home. Nothing
    /// happens unless the add route is current and every field holds
    /// non-blank text. Returns the id of the stored recipe.
    ///
    pub fn submit_add_form(&mut self) -> Option<RecipeId> {
        if *self.current_route() != Route::Add {
            return None;
        }
        let recipe = self.add_form.submission()?;
        let id = self
            .store
            .add(recipe.title, recipe.ingredients, recipe.steps);
        self.add_form.clear();
        self.navigator.add_submitted();
        self.sync_recipes();
        Some(id)
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        debug!("Log pane {}", if self.show_log { "shown" } else { "hidden" });
        self
    }

    pub fn set_show_log(&mut self, show_log: bool) -> &mut Self {
        self.show_log = show_log;
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    /// Return up to `count` of the newest captured log lines.
    ///
    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log_buffer.recent(count)
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    pub fn set_config_location(&mut self, location: Option<String>) -> &mut Self {
        self.config_location = location;
        self
    }

    pub fn get_config_location(&self) -> Option<&str> {
        self.config_location.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AddFormField;
    use crossterm::event::{KeyCode, KeyModifiers};
    use fake::{Fake, Faker};

    fn state_with_form(title: &str, ingredients: &str, steps: &str) -> State {
        let mut state = State::default();
        state.activate_tab(Tab::Add);
        *state.get_add_form_mut() = AddForm::from_text(title, ingredients, steps);
        state
    }

    #[test]
    fn starts_on_home_with_seeded_recipes() {
        let state = State::default();
        assert_eq!(*state.current_route(), Route::Home);
        assert_eq!(state.get_recipes().len(), 2);
        assert_eq!(state.selected_recipe().unwrap().id, 1);
    }

    #[test]
    fn submit_tacos_adds_recipe_and_returns_home() {
        let mut state = state_with_form(
            "Tacos",
            "Tortilla\nBeef\nCheese",
            "Cook beef\nAssemble\nServe",
        );
        let before = state.get_store().len();

        let id = state.submit_add_form().unwrap();

        assert_eq!(id, 3);
        assert_eq!(state.get_store().len(), before + 1);
        assert_eq!(state.get_recipes().len(), before + 1);
        assert_eq!(*state.current_route(), Route::Home);
        let recipe = state.get_store().get_by_id(id).unwrap();
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.steps.len(), 3);
    }

    #[test]
    fn submit_with_empty_title_is_noop() {
        let mut state = state_with_form("", "Tortilla", "Cook");
        assert!(state.submit_add_form().is_none());
        assert_eq!(state.get_store().len(), 2);
        assert_eq!(*state.current_route(), Route::Add);
        assert_eq!(state.get_add_form().text(AddFormField::Ingredients), "Tortilla");
    }

    #[test]
    fn submit_outside_add_route_is_noop() {
        let mut state = state_with_form("Tacos", "Tortilla", "Cook");
        state.activate_tab(Tab::Settings);
        assert!(state.submit_add_form().is_none());
        assert_eq!(state.get_store().len(), 2);
    }

    #[test]
    fn blank_lines_are_excluded() {
        let mut state = state_with_form("Pair", "A\n\nB", "Mix");
        let id = state.submit_add_form().unwrap();
        assert_eq!(
            state.get_store().get_by_id(id).unwrap().ingredients,
            vec!["A", "B"]
        );
    }

    #[test]
    fn submit_clears_form_and_back_does_not_revisit_add() {
        let mut state = state_with_form("Tacos", "Tortilla", "Cook");
        state.submit_add_form().unwrap();
        assert!(!state.get_add_form().is_submittable());
        assert_eq!(state.history_len(), 1);
        assert!(!state.go_back());
        assert_eq!(*state.current_route(), Route::Home);
    }

    #[test]
    fn added_recipe_detail_matches_input() {
        let title: String = Faker.fake();
        let title = format!("Recipe {}", title);
        let mut state = state_with_form(&title, "Flour\nWater", "Knead\nBake\nCool");
        let id = state.submit_add_form().unwrap();

        state.select_recipe(id);
        assert_eq!(*state.current_route(), Route::Detail(id));
        let recipe = state.get_detail_recipe().unwrap();
        assert_eq!(recipe.title, title);
        assert_eq!(recipe.ingredients, vec!["Flour", "Water"]);
        assert_eq!(recipe.steps, vec!["Knead", "Bake", "Cool"]);
    }

    #[test]
    fn missing_recipe_detail_is_none() {
        let mut state = State::default();
        state.select_recipe(9999);
        assert_eq!(*state.current_route(), Route::Detail(9999));
        assert!(state.get_detail_recipe().is_none());
    }

    #[test]
    fn repeated_home_tab_never_grows_history() {
        let mut state = State::default();
        state.select_current_recipe();
        state.activate_tab(Tab::Add);
        for _ in 0..3 {
            state.activate_tab(Tab::Home);
            assert_eq!(state.history_len(), 1);
        }
        assert!(!state.go_back());
    }

    #[test]
    fn select_current_recipe_opens_highlighted_detail() {
        let mut state = State::default();
        state.next_recipe();
        state.select_current_recipe();
        assert_eq!(*state.current_route(), Route::Detail(2));
        assert!(state.go_back());
        assert_eq!(*state.current_route(), Route::Home);
    }

    #[test]
    fn recipe_selection_wraps() {
        let mut state = State::default();
        state.previous_recipe();
        assert_eq!(state.selected_recipe().unwrap().id, 2);
        state.next_recipe();
        assert_eq!(state.selected_recipe().unwrap().id, 1);
    }

    #[test]
    fn empty_store_has_no_selection() {
        let mut state = State::new(
            RecipeStore::new(vec![]),
            Theme::default(),
            ViewHotkeys::default(),
            LogBuffer::new(10),
        );
        assert!(state.selected_recipe().is_none());
        state.next_recipe().select_current_recipe();
        assert_eq!(*state.current_route(), Route::Home);

        state.activate_tab(Tab::Add);
        *state.get_add_form_mut() = AddForm::from_text("First", "A", "B");
        state.submit_add_form().unwrap();
        assert_eq!(state.selected_recipe().unwrap().title, "First");
    }

    #[test]
    fn sync_recipes_reports_no_change_without_mutation() {
        let mut state = State::default();
        assert!(!state.sync_recipes());
    }

    #[test]
    fn typed_input_reaches_form() {
        let mut state = State::default();
        state.activate_tab(Tab::Add);
        state.add_form_input(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(state.get_add_form().text(AddFormField::Title), "x");
    }

    #[test]
    fn detail_scroll_resets_on_navigation() {
        let mut state = State::default();
        state.select_recipe(1);
        state.scroll_detail_down().scroll_detail_down();
        assert_eq!(state.get_detail_scroll_offset(), 2);
        state.scroll_detail_up();
        assert_eq!(state.get_detail_scroll_offset(), 1);
        state.go_back();
        assert_eq!(state.get_detail_scroll_offset(), 0);
    }

    #[test]
    fn toggle_log() {
        let mut state = State::default();
        assert!(!state.is_log_visible());
        state.toggle_log();
        assert!(state.is_log_visible());
    }
}
