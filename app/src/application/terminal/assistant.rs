use colored::Colorize;
use dialoguer::Input;
use nutrihelp_core::domain::{chat::ports::ChatService, shell::Tab};

use super::{Flow, MenuChoice, Terminal, render, spinner};

impl Terminal {
    pub(super) async fn assistant_tab(&mut self) -> anyhow::Result<Flow> {
        self.print_tab_header(Tab::Chat);
        let Some(session) = self.shell.session() else {
            return Ok(Flow::Continue);
        };
        for message in session.chat.messages() {
            print!("{}", render::message(message));
        }
        println!("{}", "Leave the line blank to open the menu.".dimmed());

        loop {
            let input: String = Input::new()
                .with_prompt("You")
                .allow_empty(true)
                .interact_text()?;

            if input.trim().is_empty() {
                let choice = self.menu(Tab::Chat, &["Keep chatting".to_string()])?;
                if let MenuChoice::Action(_) = choice {
                    continue;
                }
                return self.navigate(choice).await;
            }

            let Some(session) = self.shell.session_mut() else {
                return Ok(Flow::Continue);
            };
            let Some(message) = session.chat.submit(&input) else {
                continue;
            };

            let progress = spinner("NutriHelp is typing...");
            let reply = self.service.chat(message, &session.profile).await;
            progress.finish_and_clear();

            session.chat.receive(reply);
            if let Some(last) = session.chat.messages().last() {
                print!("{}", render::message(last));
            }
        }
    }
}
