use crate::domain::{llm::schema::ResponseSchema, meal_plan::entities::MealType};

pub fn get_ingredient_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("item", ResponseSchema::String),
        ("amount", ResponseSchema::String),
    ])
}

pub fn get_recipe_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("name", ResponseSchema::String),
        (
            "mealType",
            ResponseSchema::enumeration(MealType::ALL.map(|meal_type| meal_type.as_str())),
        ),
        ("description", ResponseSchema::String),
        ("ingredients", ResponseSchema::array(get_ingredient_schema())),
        ("instructions", ResponseSchema::array(ResponseSchema::String)),
        (
            "nutritionalHighlights",
            ResponseSchema::array(ResponseSchema::String),
        ),
        ("preparationTime", ResponseSchema::String),
    ])
}

/// Returns the declared response shape for meal plan generation
pub fn get_meal_plan_schema() -> ResponseSchema {
    ResponseSchema::object([
        ("date", ResponseSchema::String),
        ("meals", ResponseSchema::array(get_recipe_schema())),
        ("dailyTips", ResponseSchema::array(ResponseSchema::String)),
    ])
}
