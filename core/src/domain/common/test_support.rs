use std::{future::Future, pin::Pin};

use crate::domain::{
    meal_plan::entities::{Ingredient, MealType, Recipe},
    profile::entities::{Gender, UserProfile},
};

/// Boxes an already-known value the way mocked async ports expect.
pub(crate) fn ready<T: Send + 'static>(value: T) -> Pin<Box<dyn Future<Output = T> + Send>> {
    Box::pin(async move { value })
}

pub(crate) fn mary() -> UserProfile {
    UserProfile {
        name: "Mary".to_string(),
        age: 68,
        gender: Gender::Female,
        health_conditions: vec!["Diabetes".to_string()],
        allergies: vec!["Peanuts".to_string()],
        dietary_preferences: vec![],
    }
}

pub(crate) fn recipe(name: &str, meal_type: MealType) -> Recipe {
    Recipe {
        name: name.to_string(),
        meal_type,
        description: format!("A simple {}", meal_type.as_str().to_lowercase()),
        ingredients: vec![Ingredient {
            item: "Water".to_string(),
            amount: "1 cup".to_string(),
        }],
        instructions: vec!["Prepare and serve.".to_string()],
        nutritional_highlights: vec![],
        preparation_time: "10 min".to_string(),
    }
}

pub(crate) fn meal_plan_json() -> String {
    r#"{
        "date": "Today",
        "meals": [
            {
                "name": "Wholegrain Porridge",
                "mealType": "Breakfast",
                "description": "Warm oats with berries.",
                "ingredients": [
                    { "item": "Rolled oats", "amount": "1/2 cup" },
                    { "item": "Blueberries", "amount": "1/4 cup" }
                ],
                "instructions": ["Simmer oats in milk.", "Top with berries."],
                "nutritionalHighlights": ["High fibre"],
                "preparationTime": "10 min"
            },
            {
                "name": "Salmon Salad",
                "mealType": "Lunch",
                "description": "Leafy greens with tinned salmon.",
                "ingredients": [{ "item": "Tinned salmon", "amount": "95 g" }],
                "instructions": ["Toss everything together."],
                "nutritionalHighlights": ["Omega-3"],
                "preparationTime": "5 min"
            },
            {
                "name": "Chicken and Vegetable Stew",
                "mealType": "Dinner",
                "description": "Soft slow-cooked stew.",
                "ingredients": [{ "item": "Chicken thigh", "amount": "150 g" }],
                "instructions": ["Brown the chicken.", "Simmer with vegetables."],
                "nutritionalHighlights": ["Protein"],
                "preparationTime": "40 min"
            },
            {
                "name": "Apple Slices with Yoghurt",
                "mealType": "Snack",
                "description": "Crisp apple with plain yoghurt.",
                "ingredients": [{ "item": "Apple", "amount": "1 medium" }],
                "instructions": ["Slice the apple."],
                "nutritionalHighlights": ["Calcium"],
                "preparationTime": "3 min"
            }
        ],
        "dailyTips": ["Drink water regularly", "Take a short walk"]
    }"#
    .to_string()
}

pub(crate) fn scan_result_json() -> String {
    r#"{
        "isSafe": false,
        "productName": "Peanut Butter Cookies",
        "reasoning": "Contains peanuts, which you are allergic to.",
        "nutritionalAnalysis": "High in sugar and saturated fat.",
        "warningLevel": "Danger"
    }"#
    .to_string()
}
