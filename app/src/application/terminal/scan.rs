use std::{path::Path, sync::Arc};

use anyhow::{Context, bail};
use colored::Colorize;
use dialoguer::Input;
use nutrihelp_core::domain::{
    llm::value_objects::InlineImage, scan::ports::ScanService, shell::Tab,
};
use tokio::fs;

use super::{Flow, MenuChoice, Terminal, render, spinner};

pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

impl Terminal {
    pub(super) async fn scan_tab(&mut self) -> anyhow::Result<Flow> {
        self.print_tab_header(Tab::Scan);
        let Some(session) = self.shell.session() else {
            return Ok(Flow::Continue);
        };
        let view = &session.scan;

        println!("{}", "Check food labels or meals for safety.".dimmed());
        let action = if view.is_loading() {
            println!("{}", "Analyzing...".green());
            "Wait for the result"
        } else {
            if let Some(failure) = view.failure() {
                print!("{}", render::failure(failure));
            } else if let Some(result) = view.result() {
                print!("{}", render::scan_result(result));
            }
            "Scan a photo"
        };

        let choice = self.menu(Tab::Scan, &[action.to_string()])?;
        let MenuChoice::Action(_) = choice else {
            return self.navigate(choice).await;
        };

        if self.pending_scan.is_some() {
            let progress = spinner("Analyzing your photo...");
            self.await_scan().await;
            progress.finish_and_clear();
        } else {
            self.scan_photo().await?;
        }
        Ok(Flow::Continue)
    }

    async fn scan_photo(&mut self) -> anyhow::Result<()> {
        let path: String = Input::new()
            .with_prompt("Path to a photo of the label or meal (blank to cancel)")
            .allow_empty(true)
            .interact_text()?;
        if path.trim().is_empty() {
            return Ok(());
        }

        let image = match load_image(Path::new(path.trim())).await {
            Ok(image) => image,
            Err(e) => {
                println!("{}", format!("{:#}", e).red());
                return Ok(());
            }
        };

        let Some(session) = self.shell.session_mut() else {
            return Ok(());
        };
        session.scan.begin_scan()?;
        let profile = session.profile.clone();
        let service = Arc::clone(&self.service);

        self.pending_scan = Some(tokio::spawn(async move {
            service.analyze_image(image, &profile).await
        }));
        Ok(())
    }
}

/// Reads an image from disk for analysis, refusing anything that is not an
/// image or is larger than [`MAX_IMAGE_BYTES`].
pub async fn load_image(path: &Path) -> anyhow::Result<InlineImage> {
    let mime_type = mime_guess::from_path(path)
        .first()
        .filter(|mime| mime.type_() == mime_guess::mime::IMAGE)
        .with_context(|| format!("{} does not look like an image", path.display()))?;

    let metadata = fs::metadata(path)
        .await
        .with_context(|| format!("cannot open {}", path.display()))?;
    if metadata.len() > MAX_IMAGE_BYTES {
        bail!("{} is larger than 10 MB", path.display());
    }

    let data = fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(InlineImage::new(data, mime_type.essence_str()))
}
