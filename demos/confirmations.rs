use steam_community_session::{SteamClient, ConfirmationType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    
    let cookies = std::env::var("COOKIES")?
        .split("; ")
        .map(|s| s.to_string())
        .collect::<Vec<_>>();
    let client = SteamClient::builder()
        .identity_secret(std::env::var("STEAM_IDENTITY_SECRET")?)
        .build()?;
    
    client.set_cookies(cookies)?;
    
    let confirmations = client.get_confirmations().await?;
    
    println!("{} pending confirmations", confirmations.len());
    
    for confirmation in confirmations {
        println!("{confirmation}");
        
        if confirmation.r#type == ConfirmationType::MarketListing {
            let details = client.get_confirmation_details(confirmation.id).await?;
            
            println!("Listing {}", details.market_hash_name.unwrap_or_default());
        }
    }
    
    Ok(())
}
