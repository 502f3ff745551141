use s2_recommendations::{ForPaperParam, PapersParam, RecommendationClient};

/// Runs the three canonical example calls against the live service and prints
/// whatever comes back. Failures are reported on stderr and do not abort the
/// remaining calls.
#[tokio::main]
async fn main() {
    let client = RecommendationClient::new();

    let mut single = ForPaperParam::new("f9c602cc436a9ea2f9e7db48c77d924e09ce3c32");
    single.limit(2);
    match client.query(&single).await {
        Ok(recs) => println!(
            "Single paper recommendations:\n{}\n",
            serde_json::to_string_pretty(&recs).unwrap()
        ),
        Err(e) => eprintln!("Error fetching recommendations from single id: {e}"),
    }

    let positive_only = PapersParam::new(["f9c602cc436a9ea2f9e7db48c77d924e09ce3c32"]);
    match client.query(&positive_only).await {
        Ok(recs) => println!(
            "Multiple positive paperIds recommendations:\n{}\n",
            serde_json::to_string_pretty(&recs).unwrap()
        ),
        Err(e) => eprintln!("Error fetching recommendations from multiple ids: {e}"),
    }

    let mut with_negative = PapersParam::new(["f9c602cc436a9ea2f9e7db48c77d924e09ce3c32"]);
    with_negative.negative_ids(["271fb7332c613b7e36bf483a9cba2dcc768c96ea"]);
    match client.query(&with_negative).await {
        Ok(recs) => println!(
            "Multiple positive and negative paperIds recommendations:\n{}",
            serde_json::to_string_pretty(&recs).unwrap()
        ),
        Err(e) => eprintln!("Error fetching recommendations from multiple ids: {e}"),
    }
}
