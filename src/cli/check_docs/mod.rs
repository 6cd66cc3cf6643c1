//! Check-docs command - prints what the model would be grounded on

use clap::Args;

use crate::config::AppConfig;
use crate::domain::document::ApiDocument;
use crate::domain::grounding::ContextBuilder;
use crate::infrastructure::logging;

#[derive(Args, Debug, Clone)]
pub struct CheckDocsArgs {
    /// OpenAPI file path or URL, overriding `documents.openapi_location`
    #[arg(long)]
    pub location: Option<String>,

    /// Context size limit in characters, overriding `assistant.max_context_chars`
    #[arg(long)]
    pub max_chars: Option<usize>,
}

/// Load the documents and print their count and the rendered context
pub async fn run(args: CheckDocsArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    if let Some(location) = args.location {
        config.documents.openapi_location = Some(location);
    }
    let max_chars = args
        .max_chars
        .unwrap_or(config.assistant.max_context_chars);

    let documents = crate::load_documents(&config).await;
    println!("{}", render_report(&documents, max_chars));

    Ok(())
}

fn render_report(documents: &[ApiDocument], max_chars: usize) -> String {
    let context = ContextBuilder::new(max_chars).build(documents);

    format!(
        "documents: {}\ncontext chars: {} / {}\n\n{}",
        documents.len(),
        context.chars().count(),
        max_chars,
        context
    )
}
