use actix_web::rt;
use std::time::Duration;

/// Periodically GET our own public URL so the hosting platform does not
/// suspend an idle process. Runs for the life of the process; every kind
/// of failure is logged and swallowed.
pub async fn run(url: String, interval: Duration) {
    let client = awc::Client::default();
    loop {
        rt::time::delay_for(interval).await;
        match client.get(url.as_str()).send().await {
            Ok(res) if res.status().is_success() => {
                log::debug!("keep-alive ping to {} ok", url);
            }
            Ok(res) => {
                log::warn!("keep-alive ping to {} returned {}", url, res.status());
            }
            Err(err) => {
                log::warn!("keep-alive ping to {} failed: {}", url, err);
            }
        }
    }
}
