//! newsrec: pick an article, get more like it, plus a few that are not.

use std::io;

use anyhow::Context;
use clap::Parser;

use newsrec_cli::{run, Cli};
use newsrec_corpus::CorpusLoader;
use newsrec_observability::init_from_config;
use newsrec_session::RecommendationSession;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_from_config(&config.observability);

    let path = config
        .corpus
        .path
        .clone()
        .context("no corpus given: pass a file or set corpus.path in the config")?;
    let corpus = CorpusLoader::new(config.corpus.clone())
        .with_seed(config.session.seed)
        .load(&path)
        .with_context(|| format!("loading corpus {path}"))?;

    let mut session = RecommendationSession::new(corpus, &config)?;
    let count = session.recommendation_count();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut session, count, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
