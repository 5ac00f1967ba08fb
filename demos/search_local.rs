use twilio_numbers::{Auth, CountryCode, RequestOption, RequestOptions, TwilioClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let country = std::env::var("TWILIO_COUNTRY").unwrap_or_else(|_| "US".to_owned());
    let mut options = RequestOptions::new().with(RequestOption::SmsEnabled(true));
    if let Ok(area_code) = std::env::var("TWILIO_AREA_CODE") {
        options.set(RequestOption::AreaCode(area_code.parse()?));
    }

    let client = TwilioClient::new(Auth::from_env()?);
    let found = client
        .available_phone_numbers()
        .local(&CountryCode::new(country)?, options)
        .await?;

    for number in &found.available_phone_numbers {
        println!(
            "{} ({}) region: {:?}, capabilities: {:?}",
            number.phone_number, number.friendly_name, number.region, number.capabilities
        );
    }

    Ok(())
}
