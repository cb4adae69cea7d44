use std::fmt;

use serde::{Deserialize, Serialize};

/// One day of recipes produced by the AI service.
///
/// `date` is informational text and is not checked against any calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub date: String,
    pub meals: Vec<Recipe>,
    pub daily_tips: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub meal_type: MealType,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub nutritional_highlights: Vec<String>,
    /// Free text such as "15 min".
    pub preparation_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MealPlan {
    /// Meal types the plan was asked for but does not contain.
    pub fn missing_meal_types(&self) -> Vec<MealType> {
        MealType::ALL
            .into_iter()
            .filter(|meal_type| !self.meals.iter().any(|meal| meal.meal_type == *meal_type))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::recipe;

    #[test]
    fn complete_plan_misses_nothing() {
        let plan = MealPlan {
            date: "Today".to_string(),
            meals: MealType::ALL.into_iter().map(|t| recipe("Dish", t)).collect(),
            daily_tips: vec![],
        };
        assert!(plan.missing_meal_types().is_empty());
    }

    #[test]
    fn reports_absent_meal_types_in_canonical_order() {
        let plan = MealPlan {
            date: "Today".to_string(),
            meals: vec![
                recipe("Porridge", MealType::Breakfast),
                recipe("Soup", MealType::Dinner),
            ],
            daily_tips: vec![],
        };
        assert_eq!(
            plan.missing_meal_types(),
            vec![MealType::Lunch, MealType::Snack]
        );
    }
}
