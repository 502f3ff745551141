use clap::{Parser, Subcommand};
use s2_recommendations::{
    ForPaperParam, PapersParam, RecommendationClient, RecommendationPool, Result,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "recommend", version, about = "Query the Semantic Scholar Recommendations API")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommendations seeded by a single paper
    Single {
        /// Seed paper id (sha, `DOI:...`, `ARXIV:...`, ...)
        paper_id: String,
        /// Maximum number of recommendations
        #[arg(long, default_value_t = 5)]
        limit: u32,
        /// Comma-separated field list returned for each paper
        #[arg(long, default_value = "title,url")]
        fields: String,
        /// Candidate pool to recommend from
        #[arg(long, default_value = "all-cs")]
        pool: Pool,
    },
    /// Recommendations seeded by positive and negative paper sets
    Multi {
        /// Positive seed id, repeatable
        #[arg(long = "positive", required = true)]
        positive_ids: Vec<String>,
        /// Negative seed id, repeatable
        #[arg(long = "negative")]
        negative_ids: Vec<String>,
        /// Maximum number of recommendations
        #[arg(long, default_value_t = 5)]
        limit: u32,
        /// Comma-separated field list returned for each paper
        #[arg(long, default_value = "title,url")]
        fields: String,
    },
}

/// Candidate pool for the single-seed call; invalid values are rejected at
/// parse time
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Pool {
    /// All computer science papers
    #[default]
    AllCs,
    /// Recently published papers only
    Recent,
}

impl From<Pool> for RecommendationPool {
    fn from(pool: Pool) -> Self {
        match pool {
            Pool::AllCs => RecommendationPool::AllCs,
            Pool::Recent => RecommendationPool::Recent,
        }
    }
}

async fn run(client: &RecommendationClient, command: Command) -> Result<serde_json::Value> {
    match command {
        Command::Single {
            paper_id,
            limit,
            fields,
            pool,
        } => {
            let mut param = ForPaperParam::new(paper_id);
            param.pool(pool.into()).limit(limit).fields(&fields);
            client.query(&param).await
        }
        Command::Multi {
            positive_ids,
            negative_ids,
            limit,
            fields,
        } => {
            let mut param = PapersParam::new(positive_ids);
            param
                .negative_ids(negative_ids)
                .limit(limit)
                .fields(&fields);
            client.query(&param).await
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let client = RecommendationClient::from_env().unwrap_or_else(|_| RecommendationClient::new());

    let result = run(&client, cli.command).await.inspect_err(|e| {
        tracing::error!("recommendation request failed: {e}");
    })?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspelled_pool_is_rejected() {
        let res = Cli::try_parse_from(["recommend", "single", "ABC123", "--pool", "recnt"]);
        assert!(res.is_err());
        let res = Cli::try_parse_from(["recommend", "single", "ABC123", "--pool", "ALL"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_pool_wire_names_parse() {
        let cli =
            Cli::try_parse_from(["recommend", "single", "ABC123", "--pool", "recent"]).unwrap();
        let Command::Single { pool, .. } = cli.command else {
            panic!("expected single subcommand");
        };
        assert_eq!(RecommendationPool::from(pool), RecommendationPool::Recent);

        let cli = Cli::try_parse_from(["recommend", "single", "ABC123"]).unwrap();
        let Command::Single { pool, .. } = cli.command else {
            panic!("expected single subcommand");
        };
        assert_eq!(RecommendationPool::from(pool), RecommendationPool::AllCs);
    }
}
