use std::io;

use twilio_numbers::{
    Auth, CountryCode, FriendlyName, RequestOption, RequestOptions, TwilioClient,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let area_code = std::env::var("TWILIO_AREA_CODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TWILIO_AREA_CODE environment variable is required",
        )
    })?;

    let client = TwilioClient::new(Auth::from_env()?);
    let found = client
        .available_phone_numbers()
        .local(
            &CountryCode::new("US")?,
            RequestOption::AreaCode(area_code.parse()?),
        )
        .await?;

    let Some(number) = found.available_phone_numbers.first() else {
        println!("no numbers available in area code {area_code}");
        return Ok(());
    };

    let mut options = RequestOptions::new();
    if let Ok(name) = std::env::var("TWILIO_FRIENDLY_NAME") {
        options.set(RequestOption::FriendlyName(FriendlyName::new(name)?));
    }

    let purchased = client.available_phone_numbers().buy(number, options).await?;
    println!(
        "bought {} as {} (sid {})",
        purchased.phone_number, purchased.friendly_name, purchased.sid
    );

    Ok(())
}
