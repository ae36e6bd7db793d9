use steam_community_session::{SteamClient, default_data_directory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let client = SteamClient::builder()
        .credentials(std::env::var("STEAM_USERNAME")?, std::env::var("STEAM_PASSWORD")?)
        .shared_secret(std::env::var("STEAM_SHARED_SECRET")?)
        .build()?;
    let session_path = default_data_directory().join("session.json");
    
    client.sync_time_offset().await?;
    client.login(true).await?;
    
    println!("Logged in as {}", u64::from(client.get_steamid()?));
    
    if let Some(claims) = client.access_token_claims() {
        println!("Access token expires at {}", claims.expires_at());
    }
    
    // Save the session so it can be restored later without logging in again.
    client.save_session(&session_path).await?;
    
    Ok(())
}
