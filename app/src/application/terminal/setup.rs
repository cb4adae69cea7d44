use colored::Colorize;
use dialoguer::{Input, Select};
use nutrihelp_core::domain::profile::{
    entities::Gender,
    value_objects::{CreateProfileInput, DEFAULT_AGE},
};

use super::{Flow, Terminal};

impl Terminal {
    pub(super) async fn setup(&mut self) -> anyhow::Result<Flow> {
        println!();
        println!("{}", "Welcome to NutriHelp".bold().green());
        println!("Let's personalise your nutrition plan.");
        println!();

        let input = profile_form()?;
        match self.shell.complete_setup(self.service.as_ref(), input).await {
            Ok(profile) => {
                println!("{}", format!("Thanks, {}! Your profile is saved.", profile.name).green());
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
        Ok(Flow::Continue)
    }
}

fn profile_form() -> anyhow::Result<CreateProfileInput> {
    let name: String = Input::new().with_prompt("Your name").interact_text()?;
    let age: u32 = Input::new()
        .with_prompt("Age")
        .default(DEFAULT_AGE)
        .interact_text()?;

    let genders: Vec<String> = Gender::ALL.iter().map(Gender::to_string).collect();
    let gender = Select::new()
        .with_prompt("Gender")
        .items(&genders)
        .default(0)
        .interact()?;

    let health_conditions = list_field("Health conditions (e.g. Diabetes, High Blood Pressure)")?;
    let allergies = list_field("Allergies (e.g. Peanuts, Shellfish, Gluten)")?;
    let dietary_preferences = list_field("Dietary preferences (e.g. Vegetarian, Low Salt)")?;

    Ok(CreateProfileInput {
        name,
        age,
        gender: Gender::ALL[gender],
        health_conditions,
        allergies,
        dietary_preferences,
    })
}

fn list_field(prompt: &str) -> anyhow::Result<String> {
    let value = Input::<String>::new()
        .with_prompt(format!("{} - comma separated", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
