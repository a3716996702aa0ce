use reqwest::Client;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new();
    let base_url =
        std::env::var("ASK_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".to_string());

    println!("Testing ask_chat_gpt client against {}", base_url);

    println!("\nValid batch:");
    let payload = json!({
        "questions": ["What is 2+2?", "Capital of France?"]
    });
    let response = client
        .get(format!("{}/ask_chat_gpt", base_url))
        .json(&payload)
        .send()
        .await?;

    println!("Status: {}", response.status());
    let text = response.text().await?;
    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(answers) => println!("Response: {}", serde_json::to_string_pretty(&answers)?),
        Err(_) => println!("Response: {}", text),
    }

    println!("\nMissing questions:");
    let response = client
        .get(format!("{}/ask_chat_gpt", base_url))
        .json(&json!({}))
        .send()
        .await?;
    println!("Status: {}", response.status());
    println!("Response: {}", response.text().await?);

    println!("\nWrong type:");
    let response = client
        .get(format!("{}/ask_chat_gpt", base_url))
        .json(&json!({"questions": "hello"}))
        .send()
        .await?;
    println!("Status: {}", response.status());
    println!("Response: {}", response.text().await?);

    Ok(())
}
