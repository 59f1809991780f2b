use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use rag::{ApiClient, Config, Corpus, answer_query, index_corpus};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kbbot=info,rag=info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cfg = Config::from_env().context("failed to load configuration")?;
    let client = ApiClient::new(&cfg)?;

    println!("Internal Company Knowledge Base Bot");
    println!("Type 'exit' to quit\n");

    println!("Loading documents and creating chunks...");
    let (corpus, report) = index_corpus(&cfg, &client)
        .with_context(|| format!("failed to index {}", cfg.source_dir))?;
    for skipped in &report.skipped {
        println!("Skipping {}: {}", skipped.path.display(), skipped.error);
    }
    println!("Embeddings ready for {} document chunks.\n", corpus.len());

    run_loop(&cfg, &client, &corpus)
}

fn run_loop(cfg: &Config, client: &ApiClient, corpus: &Corpus) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut stdout = io::stdout();

    loop {
        print!("You: ");
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let question = line?;
        let question = question.trim();
        if question.is_empty() {
            continue;
        }
        if question.eq_ignore_ascii_case("exit") {
            break;
        }

        match answer_query(cfg, client, client, corpus, question) {
            Ok((_context, answer)) => println!("\nBot: {}\n", answer.trim()),
            Err(err) => {
                let err = anyhow::Error::from(err);
                warn!(error = %format!("{:#}", err), "question failed");
                println!("\nBot: Sorry, I could not answer that: {:#}\n", err);
            }
        }
    }

    info!("session ended");
    println!("Bot: Goodbye! Let me know if you need anything else.");
    Ok(())
}
