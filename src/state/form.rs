//! Add-recipe form state.
//!
//! This module contains the form fields, the submission gate and the
//! splitting of multi-line input into ingredient and step entries.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

/// Specifying add form field state.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AddFormField {
    Title,
    Ingredients,
    Steps,
}

impl AddFormField {
    pub const ALL: [AddFormField; 3] = [
        AddFormField::Title,
        AddFormField::Ingredients,
        AddFormField::Steps,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AddFormField::Title => "Recipe Title",
            AddFormField::Ingredients => "Ingredients (one per line)",
            AddFormField::Steps => "Steps (one per line)",
        }
    }

    fn next(&self) -> Self {
        match self {
            AddFormField::Title => AddFormField::Ingredients,
            AddFormField::Ingredients => AddFormField::Steps,
            AddFormField::Steps => AddFormField::Title,
        }
    }

    fn previous(&self) -> Self {
        match self {
            AddFormField::Title => AddFormField::Steps,
            AddFormField::Ingredients => AddFormField::Title,
            AddFormField::Steps => AddFormField::Ingredients,
        }
    }
}

/// A recipe ready to be handed to the store.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Split raw multi-line input into entries, dropping blank lines. Kept lines
/// are not trimmed.
///
pub fn parse_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn text_area(text: &str) -> TextArea<'static> {
    let mut area = TextArea::new(text.split('\n').map(|line| line.to_string()).collect());
    area.set_cursor_line_style(Style::default());
    area
}

/// Holds the add form input.
///
pub struct AddForm {
    title: TextArea<'static>,
    ingredients: TextArea<'static>,
    steps: TextArea<'static>,
    focused: AddFormField,
}

impl Default for AddForm {
    fn default() -> Self {
        AddForm::from_text("", "", "")
    }
}

impl AddForm {
    /// Return a form pre-filled with the given raw text.
    ///
    pub fn from_text(title: &str, ingredients: &str, steps: &str) -> Self {
        let mut form = AddForm {
            title: text_area(title),
            ingredients: text_area(ingredients),
            steps: text_area(steps),
            focused: AddFormField::Title,
        };
        form.update_cursors();
        form
    }

    pub fn focused(&self) -> AddFormField {
        self.focused
    }

    pub fn focus_next(&mut self) -> &mut Self {
        self.focused = self.focused.next();
        self.update_cursors();
        self
    }

    pub fn focus_previous(&mut self) -> &mut Self {
        self.focused = self.focused.previous();
        self.update_cursors();
        self
    }

    /// Forward a key press to the focused field. Enter in the title moves
    /// to the next field since the title is a single line.
    ///
    pub fn input(&mut self, key: KeyEvent) -> &mut Self {
        match self.focused {
            AddFormField::Title if key.code == KeyCode::Enter => {
                self.focus_next();
            }
            field => {
                self.field_mut(field).input(key);
            }
        }
        self
    }

    pub fn field(&self, field: AddFormField) -> &TextArea<'static> {
        match field {
            AddFormField::Title => &self.title,
            AddFormField::Ingredients => &self.ingredients,
            AddFormField::Steps => &self.steps,
        }
    }

    pub fn field_mut(&mut self, field: AddFormField) -> &mut TextArea<'static> {
        match field {
            AddFormField::Title => &mut self.title,
            AddFormField::Ingredients => &mut self.ingredients,
            AddFormField::Steps => &mut self.steps,
        }
    }

    /// Return the raw text of a field.
    ///
    pub fn text(&self, field: AddFormField) -> String {
        self.field(field).lines().join("\n")
    }

    /// Whether title, ingredients and steps all hold non-blank text.
    ///
    pub fn is_submittable(&self) -> bool {
        AddFormField::ALL
            .iter()
            .all(|field| !is_blank(&self.text(*field)))
    }

    /// Return the recipe described by the form, or None if a field is blank.
    ///
    pub fn submission(&self) -> Option<NewRecipe> {
        if !self.is_submittable() {
            return None;
        }
        Some(NewRecipe {
            title: self.text(AddFormField::Title),
            ingredients: parse_lines(&self.text(AddFormField::Ingredients)),
            steps: parse_lines(&self.text(AddFormField::Steps)),
        })
    }

    /// Reset every field and focus the title.
    ///
    pub fn clear(&mut self) -> &mut Self {
        *self = AddForm::default();
        self
    }

    fn update_cursors(&mut self) {
        let focused = self.focused;
        for field in AddFormField::ALL {
            let style = if field == focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            self.field_mut(field).set_cursor_style(style);
        }
    }
}
