use chrono::Local;
use colored::{ColoredString, Colorize};
use nutrihelp_core::domain::{
    chat::entities::{ChatMessage, ChatRole},
    meal_plan::entities::{MealPlan, Recipe},
    scan::entities::{ScanResult, WarningLevel},
    views::RequestFailure,
};

pub fn plan(plan: &MealPlan, expanded: Option<usize>) -> String {
    let mut out = String::new();

    if !plan.daily_tips.is_empty() {
        out.push_str(&format!("{}\n", "Daily Tips".bold().blue()));
        for tip in &plan.daily_tips {
            out.push_str(&format!("  • {}\n", tip));
        }
        out.push('\n');
    }

    for (index, recipe) in plan.meals.iter().enumerate() {
        out.push_str(&meal_card(recipe));
        if expanded == Some(index) {
            out.push_str(&recipe_details(recipe));
        }
    }

    let missing = plan.missing_meal_types();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|meal_type| meal_type.as_str()).collect();
        out.push_str(&format!(
            "\n{}\n",
            format!("Note: today's plan has no {}.", names.join(", ")).yellow()
        ));
    }

    out
}

pub fn meal_card(recipe: &Recipe) -> String {
    format!(
        "{:<10} {}  {}\n",
        recipe.meal_type.as_str().to_uppercase().green().bold(),
        recipe.name.bold(),
        format!("({})", recipe.preparation_time).dimmed()
    )
}

pub fn recipe_details(recipe: &Recipe) -> String {
    let mut out = format!("    {}\n", recipe.description.italic());

    out.push_str(&format!("    {}\n", "Ingredients".bold()));
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("      - {} {}\n", ingredient.amount.bold(), ingredient.item));
    }

    out.push_str(&format!("    {}\n", "Instructions".bold()));
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        out.push_str(&format!("      {}. {}\n", step + 1, instruction));
    }

    if !recipe.nutritional_highlights.is_empty() {
        out.push_str(&format!(
            "    {} {}\n",
            "Highlights:".bold(),
            recipe.nutritional_highlights.join(", ").green()
        ));
    }
    out
}

pub fn scan_result(result: &ScanResult) -> String {
    let mut out = format!(
        "{}\n{} {}\n{} {}\n\n{}\n",
        result.display_name().bold(),
        "Warning level:".bold(),
        warning_level(result.warning_level),
        "Suitable for you:".bold(),
        if result.is_safe { "Yes".green() } else { "No".red() },
        result.reasoning
    );

    if let Some(analysis) = &result.nutritional_analysis {
        out.push_str(&format!("\n{}\n{}\n", "Nutrition Facts".bold(), analysis));
    }
    out
}

fn warning_level(level: WarningLevel) -> ColoredString {
    match level {
        WarningLevel::Safe => level.as_str().green().bold(),
        WarningLevel::Caution => level.as_str().yellow().bold(),
        WarningLevel::Danger => level.as_str().red().bold(),
    }
}

pub fn message(message: &ChatMessage) -> String {
    let time = message.timestamp.with_timezone(&Local).format("%H:%M");
    let speaker = match message.role {
        ChatRole::User => "You".cyan().bold(),
        ChatRole::Model => "NutriHelp".green().bold(),
    };
    format!("{} {}\n{}\n", speaker, time.to_string().dimmed(), message.text)
}

pub fn failure(failure: &RequestFailure) -> String {
    format!("{}\n{}\n", failure.message.red().bold(), failure.detail.to_string().dimmed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nutrihelp_core::domain::{
        common::entities::app_errors::CoreError,
        meal_plan::entities::{Ingredient, MealType},
    };

    fn recipe(name: &str, meal_type: MealType) -> Recipe {
        Recipe {
            name: name.to_string(),
            meal_type,
            description: "Warm and filling.".to_string(),
            ingredients: vec![Ingredient {
                item: "Rolled oats".to_string(),
                amount: "1/2 cup".to_string(),
            }],
            instructions: vec!["Simmer.".to_string(), "Serve.".to_string()],
            nutritional_highlights: vec!["Fibre".to_string()],
            preparation_time: "10 min".to_string(),
        }
    }

    fn sample_plan() -> MealPlan {
        MealPlan {
            date: "Today".to_string(),
            meals: vec![
                recipe("Porridge", MealType::Breakfast),
                recipe("Soup", MealType::Lunch),
            ],
            daily_tips: vec!["Stay hydrated".to_string()],
        }
    }

    #[test]
    fn collapsed_plan_lists_cards_and_missing_meals() {
        colored::control::set_override(false);
        let out = plan(&sample_plan(), None);

        assert!(out.contains("Stay hydrated"));
        assert!(out.contains("BREAKFAST"));
        assert!(out.contains("Porridge"));
        assert!(!out.contains("Ingredients"));
        assert!(out.contains("Note: today's plan has no Dinner, Snack."));
    }

    #[test]
    fn expanded_recipe_shows_steps() {
        colored::control::set_override(false);
        let out = plan(&sample_plan(), Some(0));

        assert!(out.contains("1/2 cup Rolled oats"));
        assert!(out.contains("1. Simmer."));
        assert!(out.contains("2. Serve."));
        assert_eq!(out.matches("Ingredients").count(), 1);
    }

    #[test]
    fn scan_result_without_name_or_analysis() {
        colored::control::set_override(false);
        let result = ScanResult {
            is_safe: false,
            product_name: String::new(),
            reasoning: "High in added sugar.".to_string(),
            nutritional_analysis: None,
            warning_level: WarningLevel::Caution,
        };
        let out = scan_result(&result);

        assert!(out.starts_with("Unknown Product"));
        assert!(out.contains("Warning level: Caution"));
        assert!(out.contains("Suitable for you: No"));
        assert!(!out.contains("Nutrition Facts"));
    }

    #[test]
    fn failure_shows_message_then_detail() {
        colored::control::set_override(false);
        let out = failure(&RequestFailure {
            message: "Unable to generate meal plan. Please check your connection.".to_string(),
            detail: CoreError::EmptyResponse,
        });
        assert!(out.starts_with("Unable to generate meal plan."));
        assert!(out.contains("No response content"));
    }

    #[test]
    fn message_names_the_speaker() {
        colored::control::set_override(false);
        let out = message(&ChatMessage::new(ChatRole::User, "Is tea ok?", Utc::now()));
        assert!(out.starts_with("You "));
        assert!(out.contains("Is tea ok?"));
    }
}
