use steam_community_session::{SteamClient, default_data_directory};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let client = SteamClient::builder()
        .credentials(std::env::var("STEAM_USERNAME")?, std::env::var("STEAM_PASSWORD")?)
        .shared_secret(std::env::var("STEAM_SHARED_SECRET")?)
        .build()?;
    let session_path = default_data_directory().join("session.json");
    let saved = client.load_session(&session_path).await?;
    // Logs in again when the saved cookies are no longer valid.
    let was_alive = client.restore_session(&saved.cookies).await?;
    
    if was_alive {
        println!("Session restored");
    } else {
        println!("Session expired, logged in again");
        client.save_session(&session_path).await?;
    }
    
    if let Some(token) = client.get_store_access_token().await? {
        println!("Store access token: {token}");
    }
    
    Ok(())
}
