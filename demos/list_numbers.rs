use twilio_numbers::{Auth, PageSize, RequestOption, RequestOptions, TwilioClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let client = TwilioClient::new(Auth::from_env()?);
    let numbers = client.incoming_phone_numbers();

    let mut page = numbers
        .list(RequestOption::PageSize(PageSize::new(20)?))
        .await?;
    loop {
        for number in &page.incoming_phone_numbers {
            println!("{} {} {}", number.sid, number.phone_number, number.friendly_name);
        }
        if !page.has_next_page() {
            break;
        }
        page = numbers.list_next_page(&page, RequestOptions::new()).await?;
    }

    Ok(())
}
