//! Recipe data model.
//!
//! A recipe carries a name, ordered ingredients, ordered steps and a list of
//! tag labels. Every string in a recipe must be non-empty once trimmed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ChangeLog, RecordId};

/// Validation errors raised when building recipe values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeValidationError {
    /// The recipe name was blank.
    #[error("name must not be empty")]
    EmptyName,
    /// An ingredient entry was blank.
    #[error("ingredients must not contain empty entries")]
    EmptyIngredient { index: usize },
    /// A step entry was blank.
    #[error("steps must not contain empty entries")]
    EmptyStep { index: usize },
    /// A tag label was blank.
    #[error("tag must not contain empty labels")]
    EmptyTag { index: usize },
}

fn check_name(name: &str) -> Result<(), RecipeValidationError> {
    if name.trim().is_empty() {
        return Err(RecipeValidationError::EmptyName);
    }
    Ok(())
}

fn check_entries(
    entries: &[String],
    on_empty: fn(usize) -> RecipeValidationError,
) -> Result<(), RecipeValidationError> {
    match entries.iter().position(|entry| entry.trim().is_empty()) {
        Some(index) => Err(on_empty(index)),
        None => Ok(()),
    }
}

fn ingredient_error(index: usize) -> RecipeValidationError {
    RecipeValidationError::EmptyIngredient { index }
}

fn step_error(index: usize) -> RecipeValidationError {
    RecipeValidationError::EmptyStep { index }
}

fn tag_error(index: usize) -> RecipeValidationError {
    RecipeValidationError::EmptyTag { index }
}

/// Validated content for a recipe that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    name: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    tags: Vec<String>,
}

impl NewRecipe {
    /// Validate recipe content.
    ///
    /// # Examples
    /// ```
    /// use recipe_api::domain::NewRecipe;
    ///
    /// let draft = NewRecipe::try_new(
    ///     "Tinola",
    ///     vec!["Chicken".to_owned()],
    ///     vec!["1. Simmer.".to_owned()],
    ///     vec!["Dinner".to_owned()],
    /// )
    /// .expect("valid recipe");
    /// assert_eq!(draft.name(), "Tinola");
    /// ```
    pub fn try_new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
        tags: Vec<String>,
    ) -> Result<Self, RecipeValidationError> {
        let name = name.into();
        check_name(&name)?;
        check_entries(&ingredients, ingredient_error)?;
        check_entries(&steps, step_error)?;
        check_entries(&tags, tag_error)?;
        Ok(Self {
            name,
            ingredients,
            steps,
            tags,
        })
    }

    /// Recipe name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach an identifier, producing a stored recipe.
    #[must_use]
    pub fn with_id(self, id: RecordId) -> Recipe {
        let Self {
            name,
            ingredients,
            steps,
            tags,
        } = self;
        Recipe {
            id,
            name,
            ingredients,
            steps,
            tags,
        }
    }
}

/// Partial recipe update. Omitted fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    name: Option<String>,
    ingredients: Option<Vec<String>>,
    steps: Option<Vec<String>>,
    tags: Option<Vec<String>>,
}

impl RecipePatch {
    /// Validate the supplied fields of a partial update.
    pub fn try_new(
        name: Option<String>,
        ingredients: Option<Vec<String>>,
        steps: Option<Vec<String>>,
        tags: Option<Vec<String>>,
    ) -> Result<Self, RecipeValidationError> {
        if let Some(name) = &name {
            check_name(name)?;
        }
        if let Some(ingredients) = &ingredients {
            check_entries(ingredients, ingredient_error)?;
        }
        if let Some(steps) = &steps {
            check_entries(steps, step_error)?;
        }
        if let Some(tags) = &tags {
            check_entries(tags, tag_error)?;
        }
        Ok(Self {
            name,
            ingredients,
            steps,
            tags,
        })
    }
}

/// Stored recipe.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - No entry of `ingredients`, `steps` or `tags` is blank.
/// - `id` never changes after the recipe is stored.
///
/// Tags serialise under the `tag` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDto", into = "RecipeDto")]
pub struct Recipe {
    id: RecordId,
    name: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    tags: Vec<String>,
}

impl Recipe {
    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Recipe name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ingredients in listed order.
    #[must_use]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Preparation steps in listed order.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Tag labels.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Apply a partial update in place, returning what changed.
    pub fn apply(&mut self, patch: RecipePatch) -> ChangeLog {
        let RecipePatch {
            name,
            ingredients,
            steps,
            tags,
        } = patch;
        let mut changes = ChangeLog::default();
        changes.apply("name", &mut self.name, name);
        changes.apply("ingredients", &mut self.ingredients, ingredients);
        changes.apply("steps", &mut self.steps, steps);
        changes.apply("tag", &mut self.tags, tags);
        changes
    }
}

/// Outcome of a successful recipe update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeUpdate {
    /// The recipe after the update.
    pub recipe: Recipe,
    /// Fields whose values differed.
    pub changes: ChangeLog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RecipeDto {
    id: RecordId,
    name: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    #[serde(default)]
    tag: Vec<String>,
}

impl From<Recipe> for RecipeDto {
    fn from(value: Recipe) -> Self {
        let Recipe {
            id,
            name,
            ingredients,
            steps,
            tags,
        } = value;
        Self {
            id,
            name,
            ingredients,
            steps,
            tag: tags,
        }
    }
}

impl TryFrom<RecipeDto> for Recipe {
    type Error = RecipeValidationError;

    fn try_from(value: RecipeDto) -> Result<Self, Self::Error> {
        let RecipeDto {
            id,
            name,
            ingredients,
            steps,
            tag,
        } = value;
        Ok(NewRecipe::try_new(name, ingredients, steps, tag)?.with_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[fixture]
    fn adobo() -> Recipe {
        NewRecipe::try_new(
            "Adobo",
            strings(&["Chicken", "Soy sauce"]),
            strings(&["1. Marinate.", "2. Simmer."]),
            strings(&["Lunch"]),
        )
        .expect("valid recipe")
        .with_id(RecordId::new(2))
    }

    #[rstest]
    #[case("", vec![], vec![], vec![], RecipeValidationError::EmptyName)]
    #[case("  ", vec![], vec![], vec![], RecipeValidationError::EmptyName)]
    #[case(
        "Adobo",
        vec!["Garlic".to_owned(), " ".to_owned()],
        vec![],
        vec![],
        RecipeValidationError::EmptyIngredient { index: 1 }
    )]
    #[case(
        "Adobo",
        vec![],
        vec![String::new()],
        vec![],
        RecipeValidationError::EmptyStep { index: 0 }
    )]
    #[case(
        "Adobo",
        vec![],
        vec![],
        vec!["Lunch".to_owned(), String::new()],
        RecipeValidationError::EmptyTag { index: 1 }
    )]
    fn new_recipe_rejects_blank_values(
        #[case] name: &str,
        #[case] ingredients: Vec<String>,
        #[case] steps: Vec<String>,
        #[case] tags: Vec<String>,
        #[case] expected: RecipeValidationError,
    ) {
        let result = NewRecipe::try_new(name, ingredients, steps, tags);
        assert_eq!(result, Err(expected));
    }

    #[rstest]
    fn new_recipe_accepts_empty_sequences() {
        let draft = NewRecipe::try_new("Water", Vec::new(), Vec::new(), Vec::new());
        assert!(draft.is_ok());
    }

    #[rstest]
    fn apply_overwrites_only_supplied_fields(mut adobo: Recipe) {
        let before = adobo.clone();
        let patch = RecipePatch::try_new(Some("Pork Adobo".to_owned()), None, None, None)
            .expect("valid patch");

        let changes = adobo.apply(patch);

        assert_eq!(adobo.name(), "Pork Adobo");
        assert_eq!(adobo.id(), before.id());
        assert_eq!(adobo.ingredients(), before.ingredients());
        assert_eq!(adobo.steps(), before.steps());
        assert_eq!(adobo.tags(), before.tags());
        assert_eq!(changes.fields().collect::<Vec<_>>(), vec!["name"]);
    }

    #[rstest]
    fn apply_logs_nothing_for_identical_values(mut adobo: Recipe) {
        let patch = RecipePatch::try_new(
            Some("Adobo".to_owned()),
            None,
            None,
            Some(strings(&["Lunch"])),
        )
        .expect("valid patch");

        let changes = adobo.apply(patch);
        assert!(changes.is_empty());
    }

    #[rstest]
    fn patch_rejects_blank_supplied_fields() {
        let result = RecipePatch::try_new(None, None, Some(strings(&["1. Go", ""])), None);
        assert_eq!(result, Err(RecipeValidationError::EmptyStep { index: 1 }));
    }

    #[rstest]
    fn serialises_tags_under_tag_key(adobo: Recipe) {
        let value = serde_json::to_value(&adobo).expect("serialise recipe");
        assert_eq!(
            value,
            json!({
                "id": 2,
                "name": "Adobo",
                "ingredients": ["Chicken", "Soy sauce"],
                "steps": ["1. Marinate.", "2. Simmer."],
                "tag": ["Lunch"],
            })
        );
    }

    #[rstest]
    fn deserialising_validates_content() {
        let result: Result<Recipe, _> = serde_json::from_value(json!({
            "id": 1,
            "name": " ",
            "ingredients": [],
            "steps": [],
        }));
        assert!(result.is_err());
    }

    #[rstest]
    fn deserialising_defaults_missing_tags() {
        let recipe: Recipe = serde_json::from_value(json!({
            "id": 1,
            "name": "Rice",
            "ingredients": ["Rice"],
            "steps": ["1. Cook."],
        }))
        .expect("recipe without tags");
        assert!(recipe.tags().is_empty());
    }
}
