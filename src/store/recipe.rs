use fake::Dummy;

/// Identifier assigned to a recipe by the store.
///
pub type RecipeId = u32;

/// Defines recipe data structure.
///
/// Ingredients and steps keep the order they were entered in; steps are
/// numbered by position when displayed.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    /// Return a short "N ingredients • M steps" summary.
    ///
    pub fn summary(&self) -> String {
        format!(
            "{} ingredients • {} steps",
            self.ingredients.len(),
            self.steps.len()
        )
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Recipes every new session starts with.
///
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Spaghetti Carbonara".to_string(),
            ingredients: lines(&["Pasta", "Eggs", "Bacon", "Parmesan", "Black pepper"]),
            steps: lines(&[
                "Boil pasta until al dente",
                "Fry bacon until crispy",
                "Mix eggs and parmesan",
                "Combine hot pasta with bacon",
                "Add egg mixture and stir quickly",
                "Season with black pepper",
            ]),
        },
        Recipe {
            id: 2,
            title: "Chocolate Chip Cookies".to_string(),
            ingredients: lines(&[
                "Flour",
                "Butter",
                "Sugar",
                "Eggs",
                "Chocolate chips",
                "Vanilla",
            ]),
            steps: lines(&[
                "Cream butter and sugar",
                "Add eggs and vanilla",
                "Mix in flour",
                "Fold in chocolate chips",
                "Bake at 350°F for 12 minutes",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn summary_counts_lines() {
        let recipe = Recipe {
            ingredients: lines(&["a", "b", "c"]),
            steps: lines(&["x"]),
            ..Faker.fake()
        };
        assert_eq!(recipe.summary(), "3 ingredients • 1 steps");
    }

    #[test]
    fn seed_recipes_have_ids_one_and_two() {
        let seeds = seed_recipes();
        let ids: Vec<RecipeId> = seeds.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(seeds[0].title, "Spaghetti Carbonara");
        assert_eq!(seeds[0].ingredients.len(), 5);
        assert_eq!(seeds[0].steps.len(), 6);
        assert_eq!(seeds[1].title, "Chocolate Chip Cookies");
        assert_eq!(seeds[1].ingredients.len(), 6);
        assert_eq!(seeds[1].steps.len(), 5);
    }
}
